use crate::{
    api::Employee,
    components::{
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
    },
};
use leptos::*;

#[component]
pub fn EmployeeTable(
    #[prop(into)] employees: Signal<Vec<Employee>>,
    on_delete: Callback<i64>,
    #[prop(optional, into)] deleting: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !employees.with(Vec::is_empty)
            fallback=|| view! { <EmptyState title="No employees found. Add your first employee!" /> }
        >
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Employee ID"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Full Name"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Email"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Department"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || employees.get()
                            key=|employee| employee.id
                            children=move |employee| {
                                let id = employee.id;
                                view! {
                                    <tr data-employee-row=id>
                                        <td class="px-4 py-2 text-sm font-semibold text-fg">{employee.employee_id}</td>
                                        <td class="px-4 py-2 text-sm text-fg">{employee.full_name}</td>
                                        <td class="px-4 py-2 text-sm text-fg-muted">{employee.email}</td>
                                        <td class="px-4 py-2 text-sm">
                                            <span class="badge badge-department">{employee.department.as_str()}</span>
                                        </td>
                                        <td class="px-4 py-2 text-sm">
                                            <Button
                                                variant=ButtonVariant::Danger
                                                disabled=deleting
                                                on_click=Callback::new(move |_| on_delete.call(id))
                                            >
                                                "Delete"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
