use leptos::*;
use leptos_router::*;

use crate::{
    api::token::Role,
    components::guard::{RequireAuth, RequireRole},
    pages::{AdminPage, EducatorPage, HomePage, LoginPage, MessagesPage, StudentPage},
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/student",
    "/educator",
    "/messages",
    "/admin",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/student", "/educator", "/messages", "/admin"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/student" view=ProtectedStudent/>
                    <Route path="/educator" view=ProtectedEducator/>
                    <Route path="/messages" view=ProtectedMessages/>
                    <Route path="/admin" view=ProtectedAdmin/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

// Any signed-in user may browse the learning page; only the educator and
// admin surfaces are role-gated.
#[component]
fn ProtectedStudent() -> impl IntoView {
    view! { <RequireAuth><StudentPage/></RequireAuth> }
}

#[component]
fn ProtectedEducator() -> impl IntoView {
    view! { <RequireRole role=Role::Educator><EducatorPage/></RequireRole> }
}

#[component]
fn ProtectedMessages() -> impl IntoView {
    view! { <RequireAuth><MessagesPage/></RequireAuth> }
}

#[component]
fn ProtectedAdmin() -> impl IntoView {
    view! { <RequireRole role=Role::Admin><AdminPage/></RequireRole> }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_role_has_a_landing_route() {
        for role in [Role::Student, Role::Educator, Role::Admin] {
            assert!(ROUTE_PATHS.contains(&role.home_path()));
        }
    }

    #[test]
    fn protected_and_public_partition_the_routes() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS.iter().chain(PUBLIC_ROUTE_PATHS) {
            assert!(all.contains(path), "unknown route: {}", path);
        }
        assert_eq!(
            PROTECTED_ROUTE_PATHS.len() + PUBLIC_ROUTE_PATHS.len(),
            ROUTE_PATHS.len()
        );
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
