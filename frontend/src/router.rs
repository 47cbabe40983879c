use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::layout::Layout,
    pages::{AddEmployeePage, AttendancePage, DashboardPage, EmployeesPage},
};

pub const ROUTE_PATHS: &[&str] = &["/", "/employees", "/add", "/attendance"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    view! {
        <Title text="HRMS Lite"/>
        <Router>
            <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/employees" view=EmployeesPage/>
                <Route path="/add" view=AddEmployeePage/>
                <Route path="/attendance" view=AttendancePage/>
                <Route path="/*any" view=NotFound/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Layout>
            <div class="bg-surface-elevated shadow rounded-lg p-6 text-center">
                <p class="text-sm text-fg">"Page not found."</p>
                <a href="/" class="text-sm text-action-primary-bg">"Back to dashboard"</a>
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::NAV_LINKS;
    use std::collections::HashSet;

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn every_nav_link_has_a_route() {
        for (href, _) in NAV_LINKS {
            assert!(ROUTE_PATHS.contains(href), "nav link without route: {}", href);
        }
        assert_eq!(NAV_LINKS.len(), ROUTE_PATHS.len());
    }
}
