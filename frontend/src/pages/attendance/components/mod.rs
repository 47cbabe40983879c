pub mod form;
pub mod records;

pub use form::MarkAttendanceForm;
pub use records::RecordsTable;
