use super::repository::{self, DashboardSnapshot};
use crate::api::{ApiClient, ApiError};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub snapshot: Resource<(), Result<DashboardSnapshot, ApiError>>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    let snapshot = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { repository::fetch_dashboard(&api).await }
        },
    );

    DashboardViewModel { snapshot }
}
