use crate::{
    components::layout::Layout,
    pages::add_employee::{components::EmployeeForm, view_model::use_add_employee_view_model},
};
use leptos::*;

#[component]
pub fn AddEmployeePage() -> impl IntoView {
    let vm = use_add_employee_view_model();
    let pending = vm.create_action.pending();

    view! {
        <Layout>
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4 max-w-xl">
                <h1 class="text-lg font-semibold text-fg">"Add New Employee"</h1>
                <EmployeeForm
                    form=vm.form
                    messages=vm.messages
                    pending=pending
                    on_submit=Callback::new(move |_| vm.submit())
                />
            </div>
        </Layout>
    }
}
