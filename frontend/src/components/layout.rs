use leptos::*;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/employees", "Employees"),
    ("/add", "Add Employee"),
    ("/attendance", "Attendance"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-fg">
                        "HRMS Lite"
                    </a>
                    <nav class="hidden md:flex space-x-4">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| view! {
                                <a
                                    href=*href
                                    class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                >
                                    {*label}
                                </a>
                            })
                            .collect_view()}
                    </nav>
                    <button
                        type="button"
                        class="md:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        on:click=toggle_menu
                        aria-expanded=move || menu_open.get()
                        aria-controls="mobile-nav"
                    >
                        <span class="sr-only">
                            {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                        </span>
                        <i class="fas fa-bars"></i>
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <nav id="mobile-nav" class="md:hidden border-t border-border px-4 py-2 space-y-1">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! {
                            <a
                                href=*href
                                class="block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-base font-medium"
                                on:click=move |_| set_menu_open.set(false)
                            >
                                {*label}
                            </a>
                        })
                        .collect_view()}
                </nav>
            </Show>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" role="alert">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4" role="status">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_lists_every_section() {
        let html = render_to_string(|| view! { <Header /> });
        assert!(html.contains("HRMS Lite"));
        for (href, label) in NAV_LINKS {
            assert!(html.contains(&format!("href=\"{}\"", href)));
            assert!(html.contains(label));
        }
    }

    #[test]
    fn banners_render_their_message() {
        let html = render_to_string(|| {
            view! {
                <div>
                    <ErrorMessage message="Failed to mark attendance" />
                    <SuccessMessage message="Attendance marked successfully!" />
                </div>
            }
        });
        assert!(html.contains("Failed to mark attendance"));
        assert!(html.contains("Attendance marked successfully!"));
        assert!(html.contains("role=\"alert\""));
    }
}
