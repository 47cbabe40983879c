use crate::{
    api::{AttendanceRecord, Employee},
    components::empty_state::EmptyState,
    pages::attendance::utils::{build_record_rows, overflow_notice, EmployeeIndex},
};
use leptos::*;

#[component]
pub fn RecordsTable(records: Vec<AttendanceRecord>, employees: Vec<Employee>) -> impl IntoView {
    let index = EmployeeIndex::new(&employees);
    let rows = build_record_rows(&records, &index);
    let notice = overflow_notice(records.len());

    let body = if rows.is_empty() {
        view! { <EmptyState title="No attendance records yet." /> }.into_view()
    } else {
        view! {
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Employee"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Date"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {rows
                            .into_iter()
                            .map(|row| view! {
                                <tr data-record-row=row.id>
                                    <td class="px-4 py-2 text-sm text-fg">{row.employee}</td>
                                    <td class="px-4 py-2 text-sm text-fg-muted">{row.date}</td>
                                    <td class="px-4 py-2 text-sm">
                                        <span class=row.status.badge_class()>{row.status.as_str()}</span>
                                    </td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        }
        .into_view()
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Recent Attendance Records"</h2>
            {body}
            {notice.map(|text| view! { <p class="text-center text-sm text-fg-muted mt-4">{text}</p> })}
        </div>
    }
}
