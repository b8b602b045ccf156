use crate::components::layout::LoadingSpinner;
use crate::state::auth::use_auth;
use crate::utils::browser;
use leptos::*;

/// Landing route. Authenticated users bounce to their role's home page,
/// everyone else to the login page.
#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        match state.role() {
            Some(role) => browser::redirect_to(role.home_path()),
            None => browser::redirect_to("/login"),
        }
    });
    view! { <LoadingSpinner /> }
}
