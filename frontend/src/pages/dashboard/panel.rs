use crate::{
    components::layout::{ErrorMessage, Layout, LoadingSpinner},
    config,
    pages::dashboard::{
        components::{MetricsGrid, RecentEmployees},
        repository::DashboardSnapshot,
        utils::{build_metric_cards, dashboard_error_message},
        view_model::use_dashboard_view_model,
    },
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();

    view! {
        <Layout>
            <div class="space-y-6">
                <h1 class="text-2xl font-bold text-fg">"Dashboard Overview"</h1>
                {move || match vm.snapshot.get() {
                    None => view! {
                        <div class="flex items-center gap-2 text-sm text-fg-muted">
                            <LoadingSpinner />
                            <span>"Loading dashboard..."</span>
                        </div>
                    }
                    .into_view(),
                    Some(Err(err)) => view! {
                        <ErrorMessage message=dashboard_error_message(&err, &config::api_base_url()) />
                    }
                    .into_view(),
                    Some(Ok(snapshot)) => view! { <DashboardContent snapshot=snapshot /> }.into_view(),
                }}
            </div>
        </Layout>
    }
}

#[component]
pub fn DashboardContent(snapshot: DashboardSnapshot) -> impl IntoView {
    view! {
        <MetricsGrid cards=build_metric_cards(&snapshot.stats) />
        <RecentEmployees employees=snapshot.recent_employees />
    }
}
