use super::{
    repository,
    utils::{EmployeeFormState, CREATE_FAILED_MESSAGE, CREATE_SUCCESS_MESSAGE, REDIRECT_DELAY_MS},
};
use crate::{
    api::{ApiClient, ApiError, Employee, NewEmployee},
    utils::{messages::MessageState, time::run_after},
};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};
use std::rc::Rc;

pub const EMPLOYEES_PATH: &str = "/employees";

pub type Redirect = Rc<dyn Fn(&str)>;

#[derive(Clone, Copy)]
pub struct AddEmployeeViewModel {
    pub form: RwSignal<EmployeeFormState>,
    pub messages: RwSignal<MessageState>,
    pub create_action: Action<NewEmployee, Result<Employee, ApiError>>,
    redirect: StoredValue<Redirect>,
}

impl AddEmployeeViewModel {
    pub fn submit(&self) {
        self.messages.update(MessageState::clear);
        match self.form.get_untracked().to_request() {
            Ok(payload) => self.create_action.dispatch(payload),
            Err(err) => self.messages.update(|state| state.set_error(err.error)),
        }
    }

    pub fn handle_create_result(&self, result: Result<Employee, ApiError>) {
        match result {
            Ok(employee) => {
                log::info!("created employee {}", employee.employee_id);
                self.messages
                    .update(|state| state.set_success(CREATE_SUCCESS_MESSAGE));
                self.form.update(EmployeeFormState::reset);
                if let Some(redirect) = self.redirect.try_with_value(Rc::clone) {
                    run_after(REDIRECT_DELAY_MS, move || redirect(EMPLOYEES_PATH));
                }
            }
            Err(err) => {
                self.messages
                    .update(|state| state.set_error(err.detail_or(CREATE_FAILED_MESSAGE)));
            }
        }
    }
}

pub fn use_add_employee_view_model() -> AddEmployeeViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let navigate = use_navigate();
    let redirect: Redirect = Rc::new(move |path: &str| navigate(path, NavigateOptions::default()));
    build_add_employee_view_model(api, redirect)
}

pub fn build_add_employee_view_model(api: ApiClient, redirect: Redirect) -> AddEmployeeViewModel {
    let form = create_rw_signal(EmployeeFormState::default());
    let messages = create_rw_signal(MessageState::default());

    let create_action = create_action(move |payload: &NewEmployee| {
        let api = api.clone();
        let payload = payload.clone();
        async move { repository::create_employee(&api, payload).await }
    });

    let vm = AddEmployeeViewModel {
        form,
        messages,
        create_action,
        redirect: store_value(redirect),
    };

    create_effect(move |_| {
        if let Some(result) = create_action.value().get() {
            vm.handle_create_result(result);
        }
    });

    vm
}
