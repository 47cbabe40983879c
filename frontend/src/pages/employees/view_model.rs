use super::{
    repository,
    utils::{remove_employee, DELETE_FAILED_MESSAGE},
};
use crate::{
    api::{ApiClient, ApiError, Employee},
    utils::dialog,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub employees_resource: Resource<(), Result<Vec<Employee>, ApiError>>,
    pub employees: RwSignal<Vec<Employee>>,
    pub pending_delete: RwSignal<Option<i64>>,
    pub delete_action: Action<i64, Result<i64, ApiError>>,
}

impl EmployeesViewModel {
    pub fn request_delete(&self, id: i64) {
        self.pending_delete.set(Some(id));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(id) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(id);
        }
    }

    pub fn handle_delete_result(&self, result: Result<i64, ApiError>) {
        match result {
            Ok(id) => self.employees.update(|list| remove_employee(list, id)),
            Err(err) => {
                log::warn!("delete failed: {}", err);
                dialog::alert(DELETE_FAILED_MESSAGE);
            }
        }
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    build_employees_view_model(api)
}

pub fn build_employees_view_model(api: ApiClient) -> EmployeesViewModel {
    let api_for_list = api.clone();
    let employees_resource = create_resource(
        || (),
        move |_| {
            let api = api_for_list.clone();
            async move { repository::fetch_employees(&api).await }
        },
    );

    let employees = create_rw_signal(Vec::<Employee>::new());
    let pending_delete = create_rw_signal(None::<i64>);

    let delete_action = create_action(move |id: &i64| {
        let api = api.clone();
        let id = *id;
        async move { repository::delete_employee(&api, id).await }
    });

    create_effect(move |_| {
        if let Some(Ok(list)) = employees_resource.get() {
            employees.set(list);
        }
    });

    let vm = EmployeesViewModel {
        employees_resource,
        employees,
        pending_delete,
        delete_action,
    };

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            vm.handle_delete_result(result);
        }
    });

    vm
}
