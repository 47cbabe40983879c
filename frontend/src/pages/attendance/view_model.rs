use super::{
    repository::{self, AttendanceRegister},
    utils::{apply_mark_result, AttendanceFormState, SUCCESS_CLEAR_DELAY_MS},
};
use crate::{
    api::{ApiClient, ApiError, AttendanceRecord, MarkAttendance},
    utils::{messages::MessageState, time::run_after},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub register_reload: RwSignal<u32>,
    pub register_resource: Resource<u32, Result<AttendanceRegister, ApiError>>,
    pub form: RwSignal<AttendanceFormState>,
    pub messages: RwSignal<MessageState>,
    pub mark_action: Action<(i64, MarkAttendance), Result<AttendanceRecord, ApiError>>,
    /// Bumped on every success; a pending auto-clear only fires for its own.
    success_generation: StoredValue<u32>,
}

impl AttendanceViewModel {
    pub fn submit(&self) {
        self.messages.update(MessageState::clear);
        match self.form.get_untracked().to_request() {
            Ok(request) => self.mark_action.dispatch(request),
            Err(err) => self.messages.update(|state| state.set_error(err.error)),
        }
    }

    pub fn handle_mark_result(&self, result: Result<AttendanceRecord, ApiError>) {
        let mut reload = false;
        self.messages
            .update(|state| reload = apply_mark_result(state, &result));
        if !reload {
            return;
        }

        self.register_reload
            .update(|value| *value = value.wrapping_add(1));
        self.success_generation
            .update_value(|generation| *generation = generation.wrapping_add(1));
        let generation = self.success_generation.get_value();
        let vm = *self;
        run_after(SUCCESS_CLEAR_DELAY_MS, move || {
            vm.clear_success_if_current(generation);
        });
    }

    /// No-op when a newer success has replaced the banner, or the page is gone.
    pub fn clear_success_if_current(&self, generation: u32) {
        if self.success_generation.try_get_value() == Some(generation) {
            self.messages.try_update(MessageState::clear_success);
        }
    }

    pub fn success_generation(&self) -> u32 {
        self.success_generation.get_value()
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    build_attendance_view_model(api)
}

pub fn build_attendance_view_model(api: ApiClient) -> AttendanceViewModel {
    let register_reload = create_rw_signal(0u32);
    let api_for_register = api.clone();
    let register_resource = create_resource(
        move || register_reload.get(),
        move |_| {
            let api = api_for_register.clone();
            async move { repository::fetch_register(&api).await }
        },
    );

    let form = create_rw_signal(AttendanceFormState::default());
    let messages = create_rw_signal(MessageState::default());

    let mark_action = create_action(move |(employee_id, payload): &(i64, MarkAttendance)| {
        let api = api.clone();
        let employee_id = *employee_id;
        let payload = payload.clone();
        async move { repository::mark_attendance(&api, employee_id, payload).await }
    });

    let vm = AttendanceViewModel {
        register_reload,
        register_resource,
        form,
        messages,
        mark_action,
        success_generation: store_value(0),
    };

    create_effect(move |_| {
        if let Some(result) = mark_action.value().get() {
            vm.handle_mark_result(result);
        }
    });

    vm
}
