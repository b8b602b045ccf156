use crate::{
    api::token::Role,
    state::auth::{self, use_auth},
};
use leptos::*;

/// Nav entries for a role. Every signed-in user gets the shared messaging
/// surface plus their own landing page.
fn nav_links(role: Option<Role>) -> Vec<(&'static str, &'static str)> {
    match role {
        Some(Role::Student) => vec![("/student", "My Learning"), ("/messages", "Messages")],
        Some(Role::Educator) => vec![("/educator", "My Courses"), ("/messages", "Messages")],
        Some(Role::Admin) => vec![("/admin", "Administration"), ("/messages", "Messages")],
        None => vec![],
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let links = move || nav_links(auth.get().role());
    let user_name = move || {
        auth.get()
            .user
            .map(|user| user.name)
            .unwrap_or_default()
    };
    let on_logout = move |_| auth::logout(set_auth);
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-fg">
                            "ClassLine"
                        </h1>
                    </div>
                    <div class="flex items-center">
                        <nav class="flex items-center space-x-4">
                            <For
                                each=links
                                key=|(href, _)| *href
                                children=|(href, label)| {
                                    view! {
                                        <a
                                            href=href
                                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                        >
                                            {label}
                                        </a>
                                    }
                                }
                            />
                            <span class="hidden sm:inline text-sm text-fg-muted px-3">
                                {user_name}
                            </span>
                            <button
                                on:click=on_logout
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "Log out"
                            </button>
                        </nav>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let (auth, _) = use_auth();
    let denial = move || auth.get().error;
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                <Show when=move || denial().is_some()>
                    <ErrorMessage message=denial().unwrap_or_default() />
                </Show>
                {children()}
            </main>
        </div>
    }
}

/// Shown above any surface currently rendering embedded demo data instead of
/// a live backend response.
#[component]
pub fn DemoDataBanner(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="mb-4">
                <div class="bg-status-warning-bg border border-status-warning-border text-status-warning-text px-4 py-3 rounded">
                    <p class="font-semibold">"Showing demo data"</p>
                    <p class="text-sm mt-1">
                        "The server could not be reached. You are viewing sample content; changes will not be saved."
                    </p>
                </div>
            </div>
        </Show>
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
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
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
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
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
    use crate::test_support::helpers::{provide_auth, user_with_role};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_renders_role_navigation() {
        let html = render_to_string(move || {
            provide_auth(Some(user_with_role(Role::Educator)));
            view! { <Header /> }
        });
        assert!(html.contains("My Courses"));
        assert!(html.contains("Messages"));
        assert!(html.contains("Log out"));
    }

    #[test]
    fn layout_renders_children_and_denial_messages() {
        let html = render_to_string(move || {
            provide_auth(Some(user_with_role(Role::Student)));
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));

        let html = render_to_string(move || {
            let (auth, set_auth) = create_signal(crate::state::auth::AuthState {
                error: Some("Access denied. Administrator privileges required.".into()),
                ..crate::state::auth::AuthState::authenticated(user_with_role(Role::Student))
            });
            provide_context((auth, set_auth));
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("Access denied. Administrator privileges required."));
    }

    #[test]
    fn demo_banner_tracks_visibility() {
        let html = render_to_string(move || {
            let (visible, _) = create_signal(true);
            view! { <DemoDataBanner visible=visible /> }
        });
        assert!(html.contains("Showing demo data"));

        let html = render_to_string(move || {
            let (visible, _) = create_signal(false);
            view! { <DemoDataBanner visible=visible /> }
        });
        assert!(!html.contains("Showing demo data"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error".into() />
                    <SuccessMessage message="ok".into() />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }
}
