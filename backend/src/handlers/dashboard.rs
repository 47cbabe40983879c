use axum::{extract::State, Json};

use crate::{models::dashboard::DashboardStats, state::AppState, utils::time::today_local};

pub async fn get_dashboard_stats(State(state): State<AppState>) -> Json<DashboardStats> {
    let today = today_local(&state.config.time_zone);
    Json(state.store.dashboard_stats(today).await)
}
