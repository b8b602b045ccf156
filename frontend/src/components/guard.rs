use crate::{
    api::token::Role,
    components::layout::LoadingSpinner,
    state::auth::{self, use_auth},
    utils::browser,
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading || state.is_authenticated {
            return;
        }
        browser::redirect_to("/login");
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

/// Renders its children only for users holding exactly `role`. Anyone else
/// has their session cleared and lands on the login page with an
/// access-denied message, the same as a 403 from the backend.
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    let is_allowed = create_memo(move |_| role_allows(auth.get().role(), role));
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        if !state.is_authenticated {
            browser::redirect_to("/login");
            return;
        }
        if let Some(held) = state.role() {
            if !role_allows(Some(held), role) {
                auth::deny_access(set_auth, role);
                browser::redirect_to("/login");
            }
        }
    });
    view! {
        <Show
            when=move || {
                should_render_role_children(is_authenticated.get(), is_loading.get(), is_allowed.get())
            }
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Exact match only. An admin browsing a student page is still denied; roles
/// are disjoint surfaces, not privilege levels.
fn role_allows(held: Option<Role>, required: Role) -> bool {
    held == Some(required)
}

fn should_render_role_children(is_authenticated: bool, is_loading: bool, is_allowed: bool) -> bool {
    is_authenticated && is_allowed && !is_loading
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RequireAuth, RequireRole};
    use crate::api::token::Role;
    use crate::test_support::helpers::{provide_auth, user_with_role};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_auth(Some(user_with_role(Role::Student)));
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn admin_gate_renders_for_admins_only() {
        let html = render_to_string(move || {
            provide_auth(Some(user_with_role(Role::Admin)));
            view! {
                <RequireRole role=Role::Admin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireRole>
            }
        });
        assert!(html.contains("admin-protected"));

        let html = render_to_string(move || {
            provide_auth(Some(user_with_role(Role::Student)));
            view! {
                <RequireRole role=Role::Admin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireRole>
            }
        });
        assert!(!html.contains("admin-protected"));
    }
}
