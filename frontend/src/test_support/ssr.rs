use crate::api::ApiClient;
use leptos::*;
use leptos_router::{Router, RouterIntegrationContext, ServerIntegration};
use std::future::Future;

/// Base URL handed to pages under test. Resource loading is suppressed, so
/// nothing is ever sent here.
pub const OFFLINE_BASE_URL: &str = "http://offline.invalid/api";

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| {
        provide_context(ApiClient::new_with_base_url(OFFLINE_BASE_URL));
        view().into_view().render_to_string().to_string()
    });
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Like `render_to_string`, for views that need a router above them.
pub fn render_routed<F, N>(path: &str, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let url = format!("http://localhost{}", path);
    render_to_string(move || {
        provide_context(RouterIntegrationContext::new(ServerIntegration { path: url }));
        view! { <Router>{view()}</Router> }
    })
}

/// Runs `f` with a live reactive runtime on a local task set, so actions
/// dispatched inside it actually run.
pub async fn with_local_runtime<F, Fut, T>(f: F) -> T
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async move {
            let runtime = leptos::create_runtime();
            let result = f().await;
            runtime.dispose();
            result
        })
        .await
}

/// Yields until `action` has produced a value and returns it.
pub async fn action_value<I, O>(action: Action<I, O>) -> O
where
    I: 'static,
    O: Clone + 'static,
{
    for _ in 0..100 {
        if let Some(value) = action.value().get_untracked() {
            return value;
        }
        tokio::task::yield_now().await;
    }
    panic!("action did not finish");
}
