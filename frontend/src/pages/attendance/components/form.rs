use crate::{
    api::{AttendanceStatus, Employee},
    components::{
        common::Button,
        layout::{ErrorMessage, SuccessMessage},
    },
    pages::attendance::utils::{employee_label, AttendanceFormState},
    utils::messages::MessageState,
};
use leptos::{ev, *};

const INPUT_CLASS: &str = "mt-1 w-full border border-border rounded px-3 py-2 bg-surface text-fg";

#[component]
pub fn MarkAttendanceForm(
    employees: Vec<Employee>,
    form: RwSignal<AttendanceFormState>,
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
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Mark Attendance"</h2>
            <Show when=move || messages.with(|m| m.error.is_some())>
                <ErrorMessage message=messages.get().error.unwrap_or_default() />
            </Show>
            <Show when=move || messages.with(|m| m.success.is_some())>
                <SuccessMessage message=messages.get().success.unwrap_or_default() />
            </Show>

            <form class="space-y-4" on:submit=handle_submit>
                <div>
                    <label class="block text-sm font-medium text-fg" for="attendance-employee">"Select Employee *"</label>
                    <select
                        id="attendance-employee"
                        class=INPUT_CLASS
                        prop:value=move || form.get().employee
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|state| state.employee = value);
                        }
                    >
                        <option value="">"-- Select Employee --"</option>
                        {employees
                            .iter()
                            .map(|employee| {
                                let value = employee.id.to_string();
                                let selected = value.clone();
                                view! {
                                    <option
                                        value=value
                                        selected=move || form.with(|state| state.employee == selected)
                                    >
                                        {employee_label(employee)}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg" for="attendance-date">"Date *"</label>
                    <input
                        id="attendance-date"
                        type="date"
                        required=true
                        class=INPUT_CLASS
                        prop:value=move || form.get().date
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|state| state.date = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg" for="attendance-status">"Status *"</label>
                    <select
                        id="attendance-status"
                        class=INPUT_CLASS
                        prop:value=move || form.get().status.as_str()
                        on:change=move |ev| {
                            if let Ok(status) = event_target_value(&ev).parse::<AttendanceStatus>() {
                                form.update(|state| state.status = status);
                            }
                        }
                    >
                        {AttendanceStatus::ALL
                            .into_iter()
                            .map(|status| view! { <option value=status.as_str()>{status.as_str()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <Button button_type="submit" loading=pending>
                    {move || if pending.get() { "Submitting..." } else { "Mark Attendance" }}
                </Button>
            </form>
        </div>
    }
}
