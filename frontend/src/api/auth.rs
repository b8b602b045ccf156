//! Two-step login: credentials first, then the emailed one-time code. A
//! verified session is persisted under the `token` and `user` storage keys.

use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::types::{
    ApiError, LoginStartRequest, LoginStartResponse, UserProfile, VerifyOtpRequest,
    VerifyOtpResponse,
};
use crate::utils::storage;

impl ApiClient {
    /// Step one: submits credentials and triggers the one-time code email.
    pub async fn request_otp(
        &self,
        email: &str,
        password: &str,
    ) -> Result<LoginStartResponse, ApiError> {
        let body = serde_json::to_value(LoginStartRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|err| ApiError::unknown(err.to_string()))?;
        self.request_public(Method::POST, "/api/auth/admin-login", Some(body))
            .await
    }

    /// Step two: exchanges the one-time code for a session token and persists
    /// the session before returning.
    pub async fn verify_otp(
        &self,
        email: &str,
        otp: &str,
    ) -> Result<VerifyOtpResponse, ApiError> {
        let body = serde_json::to_value(VerifyOtpRequest {
            email: email.to_string(),
            otp: otp.to_string(),
        })
        .map_err(|err| ApiError::unknown(err.to_string()))?;
        let response: VerifyOtpResponse = self
            .request_public(Method::POST, "/api/auth/verify-otp", Some(body))
            .await?;
        persist_session(&response);
        Ok(response)
    }
}

pub fn persist_session(response: &VerifyOtpResponse) {
    if let Err(err) = storage::set_item(storage::TOKEN_KEY, &response.token) {
        log::warn!("failed to persist session token: {}", err);
    }
    match serde_json::to_string(&response.user) {
        Ok(profile) => {
            if let Err(err) = storage::set_item(storage::USER_KEY, &profile) {
                log::warn!("failed to persist user profile: {}", err);
            }
        }
        Err(err) => log::warn!("failed to serialize user profile: {}", err),
    }
}

/// The cached profile from the last successful login, if it still parses.
pub fn stored_profile() -> Option<UserProfile> {
    let raw = storage::get_item(storage::USER_KEY)?;
    serde_json::from_str(&raw).ok()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::api::token::Role;

    #[test]
    fn persisted_sessions_can_be_read_back() {
        let _guard = storage::test_guard();
        let response = VerifyOtpResponse {
            token: "header.payload.sig".to_string(),
            user: UserProfile {
                id: "u1".to_string(),
                email: "ada@classline.dev".to_string(),
                name: "Ada".to_string(),
                role: Role::Educator,
            },
        };
        persist_session(&response);
        assert_eq!(
            storage::get_item(storage::TOKEN_KEY).as_deref(),
            Some("header.payload.sig")
        );
        let profile = stored_profile().unwrap();
        assert_eq!(profile, response.user);
        storage::remove_item(storage::TOKEN_KEY);
        storage::remove_item(storage::USER_KEY);
    }

    #[test]
    fn corrupt_profiles_read_back_as_none() {
        let _guard = storage::test_guard();
        storage::set_item(storage::USER_KEY, "{not json").unwrap();
        assert!(stored_profile().is_none());
        storage::remove_item(storage::USER_KEY);
    }
}
