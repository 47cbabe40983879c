use crate::{
    api::Department,
    components::{
        common::Button,
        layout::{ErrorMessage, SuccessMessage},
    },
    pages::add_employee::utils::EmployeeFormState,
    utils::messages::MessageState,
};
use leptos::{ev, *};

const INPUT_CLASS: &str = "mt-1 w-full border border-border rounded px-3 py-2 bg-surface text-fg";

#[component]
pub fn EmployeeForm(
    form: RwSignal<EmployeeFormState>,
    messages: RwSignal<MessageState>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        on_submit.call(());
    };

    view! {
        <div>
            <Show when=move || messages.with(|m| m.error.is_some())>
                <ErrorMessage message=messages.get().error.unwrap_or_default() />
            </Show>
            <Show when=move || messages.with(|m| m.success.is_some())>
                <SuccessMessage message=messages.get().success.unwrap_or_default() />
            </Show>

            <form class="space-y-4" on:submit=handle_submit>
                <div>
                    <label class="block text-sm font-medium text-fg" for="employee_id">"Employee ID *"</label>
                    <input
                        id="employee_id"
                        name="employee_id"
                        type="text"
                        required=true
                        placeholder="e.g., EMP001"
                        class=INPUT_CLASS
                        prop:value=move || form.get().employee_id
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|state| state.employee_id = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg" for="full_name">"Full Name *"</label>
                    <input
                        id="full_name"
                        name="full_name"
                        type="text"
                        required=true
                        placeholder="e.g., John Doe"
                        class=INPUT_CLASS
                        prop:value=move || form.get().full_name
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|state| state.full_name = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg" for="email">"Email Address *"</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        required=true
                        placeholder="e.g., john@example.com"
                        class=INPUT_CLASS
                        prop:value=move || form.get().email
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|state| state.email = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg" for="department">"Department *"</label>
                    <select
                        id="department"
                        name="department"
                        required=true
                        class=INPUT_CLASS
                        prop:value=move || form.get().department
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|state| state.department = value);
                        }
                    >
                        <option value="">"Select Department"</option>
                        {Department::ALL
                            .into_iter()
                            .map(|dept| view! { <option value=dept.as_str()>{dept.as_str()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <Button button_type="submit" loading=pending>
                    {move || if pending.get() { "Adding..." } else { "Add Employee" }}
                </Button>
            </form>
        </div>
    }
}
