use crate::{
    components::{
        confirm_dialog::ConfirmDialog,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    pages::employees::{
        components::EmployeeTable,
        utils::{DELETE_CONFIRM_MESSAGE, FETCH_FAILED_MESSAGE},
        view_model::use_employees_view_model,
    },
};
use leptos::*;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();
    let deleting = vm.delete_action.pending();
    let dialog_open = Signal::derive(move || vm.pending_delete.get().is_some());

    view! {
        <Layout>
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <h1 class="text-lg font-semibold text-fg">"All Employees"</h1>
                {move || match vm.employees_resource.get() {
                    None => view! {
                        <div class="flex items-center gap-2 text-sm text-fg-muted">
                            <LoadingSpinner />
                            <span>"Loading employees..."</span>
                        </div>
                    }
                    .into_view(),
                    Some(Err(_)) => view! { <ErrorMessage message=FETCH_FAILED_MESSAGE /> }.into_view(),
                    Some(Ok(_)) => view! {
                        <EmployeeTable
                            employees=vm.employees
                            on_delete=Callback::new(move |id| vm.request_delete(id))
                            deleting=deleting
                        />
                    }
                    .into_view(),
                }}
            </div>
            <ConfirmDialog
                is_open=dialog_open
                title="Delete employee"
                message=DELETE_CONFIRM_MESSAGE.to_string()
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
                confirm_label="Delete"
                destructive=true
            />
        </Layout>
    }
}
