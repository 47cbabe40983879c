use chrono::{Local, NaiveDate};

/// Today's date in the browser's local time zone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// ISO-8601 (`YYYY-MM-DD`) form used by `<input type="date">`.
pub fn to_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn today_input_value() -> String {
    to_input_value(today_local())
}

/// Fire-and-forget browser timer. Runs `f` once after `millis`.
#[cfg(target_arch = "wasm32")]
pub fn run_after(millis: u32, f: impl FnOnce() + 'static) {
    gloo_timers::callback::Timeout::new(millis, f).forget();
}

/// No timers off the browser; the callback is dropped.
#[cfg(not(target_arch = "wasm32"))]
pub fn run_after(millis: u32, _f: impl FnOnce() + 'static) {
    log::debug!("timer of {}ms skipped outside the browser", millis);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_value_is_zero_padded_iso_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(to_input_value(date), "2025-03-07");
    }

    #[test]
    fn today_value_parses_back() {
        let value = today_input_value();
        assert_eq!(value.len(), 10);
        assert!(NaiveDate::parse_from_str(&value, "%Y-%m-%d").is_ok());
    }
}
