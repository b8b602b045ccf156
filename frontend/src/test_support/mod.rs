#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::token::Role;
    use crate::api::types::UserProfile;
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn user_with_role(role: Role) -> UserProfile {
        UserProfile {
            id: format!("u-{}", role.as_str()),
            email: format!("{}@classline.dev", role.as_str()),
            name: match role {
                Role::Student => "Sam Student".to_string(),
                Role::Educator => "Eve Educator".to_string(),
                Role::Admin => "Ada Admin".to_string(),
            },
            role,
        }
    }

    /// Installs an auth context. `Some(user)` is an authenticated session;
    /// `None` is a signed-out visitor.
    pub fn provide_auth(
        user: Option<UserProfile>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let state = match user {
            Some(user) => AuthState::authenticated(user),
            None => AuthState::unauthenticated(),
        };
        let (auth, set_auth) = create_signal(state);
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
