//! Session state. Restored synchronously from storage when the app mounts,
//! then driven by login, logout, and gate denials.

use leptos::*;

use crate::api::auth::stored_profile;
use crate::api::token::{decode_claims, Role};
use crate::api::types::{UserProfile, VerifyOtpResponse};
use crate::utils::{browser, storage, time};

#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::unauthenticated()
    }
}

impl AuthState {
    pub fn unauthenticated() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            loading: false,
            error: None,
        }
    }

    pub fn authenticated(user: UserProfile) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            loading: false,
            error: None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth, set_auth) = create_signal(restore_session());
    provide_context::<AuthContext>((auth, set_auth));
    children()
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Rebuilds the session from storage. A token that is missing, unreadable,
/// or expired yields an unauthenticated state; expired tokens additionally
/// clear storage and send the user to the login page.
pub fn restore_session() -> AuthState {
    let Some(token) = storage::get_item(storage::TOKEN_KEY) else {
        return AuthState::unauthenticated();
    };
    let Some(claims) = decode_claims(&token) else {
        clear_session();
        return AuthState::unauthenticated();
    };
    if claims.is_expired(time::now_millis()) {
        log::info!("stored session token has expired");
        clear_session();
        browser::redirect_to("/login");
        return AuthState::unauthenticated();
    }
    // Prefer the cached profile; fall back to the claims if it is missing.
    let user = stored_profile().unwrap_or_else(|| UserProfile {
        id: claims.sub.clone(),
        email: claims.email.clone(),
        name: claims.name.clone(),
        role: claims.role,
    });
    AuthState::authenticated(user)
}

pub fn clear_session() {
    storage::remove_item(storage::TOKEN_KEY);
    storage::remove_item(storage::USER_KEY);
}

/// Called by the login page once the one-time code is verified. The token
/// and profile are already persisted by the API layer.
pub fn complete_login(set_auth: WriteSignal<AuthState>, response: &VerifyOtpResponse) {
    set_auth.set(AuthState::authenticated(response.user.clone()));
}

pub fn logout(set_auth: WriteSignal<AuthState>) {
    clear_session();
    set_auth.set(AuthState::unauthenticated());
    browser::redirect_to("/login");
}

/// Called when a role gate rejects the current user. The session is torn
/// down the same way a 403 from the backend would tear it down, with the
/// denial message left on the state for the login page to show.
pub fn deny_access(set_auth: WriteSignal<AuthState>, required: Role) {
    clear_session();
    set_auth.set(AuthState {
        error: Some(denial_message(required)),
        ..AuthState::unauthenticated()
    });
}

pub fn denial_message(required: Role) -> String {
    format!("Access denied. {} privileges required.", required.label())
}
