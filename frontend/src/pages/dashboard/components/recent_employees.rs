use crate::{api::Employee, components::empty_state::EmptyState};
use leptos::*;

#[component]
pub fn RecentEmployees(employees: Vec<Employee>) -> impl IntoView {
    let body = if employees.is_empty() {
        view! { <EmptyState title="No employees yet. Add your first employee!" /> }.into_view()
    } else {
        view! {
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Employee ID"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Name"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Department"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Email"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {employees
                            .into_iter()
                            .map(|employee| view! {
                                <tr data-employee-row=employee.id>
                                    <td class="px-4 py-2 text-sm text-fg">{employee.employee_id}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{employee.full_name}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{employee.department.as_str()}</td>
                                    <td class="px-4 py-2 text-sm text-fg-muted">{employee.email}</td>
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
            <h2 class="text-lg font-semibold text-fg">"Recent Employees"</h2>
            {body}
        </div>
    }
}
