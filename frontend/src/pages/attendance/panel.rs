use crate::{
    components::layout::{ErrorMessage, Layout, LoadingSpinner},
    pages::attendance::{
        components::{MarkAttendanceForm, RecordsTable},
        utils::LOAD_FAILED_MESSAGE,
        view_model::use_attendance_view_model,
    },
};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    let pending = vm.mark_action.pending();

    view! {
        <Layout>
            {move || match vm.register_resource.get() {
                None => view! {
                    <div class="flex items-center gap-2 text-sm text-fg-muted">
                        <LoadingSpinner />
                        <span>"Loading attendance..."</span>
                    </div>
                }
                .into_view(),
                Some(Err(_)) => view! { <ErrorMessage message=LOAD_FAILED_MESSAGE /> }.into_view(),
                Some(Ok(register)) => view! {
                    <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                        <MarkAttendanceForm
                            employees=register.employees.clone()
                            form=vm.form
                            messages=vm.messages
                            pending=pending
                            on_submit=Callback::new(move |_| vm.submit())
                        />
                        <RecordsTable records=register.records employees=register.employees />
                    </div>
                }
                .into_view(),
            }}
        </Layout>
    }
}
