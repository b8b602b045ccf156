use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::token;
use crate::api::types::ApiError;
use crate::config;
use crate::utils::{browser, storage, time};

/// HTTP client for the ClassLine backend. Cheap to clone; every request
/// re-reads the stored token so a logout in one component is visible to all.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

pub(crate) struct RawResponse {
    pub status: u16,
    pub body: Value,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    /// Pins the base URL instead of resolving it from runtime config. Used by
    /// tests and by tooling that talks to a non-default backend.
    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base_url) => base_url.clone(),
            None => config::await_api_base_url().await,
        }
    }

    /// Returns the stored bearer token, checking expiry once per request.
    /// An expired token never reaches the wire: the session is torn down
    /// locally and the caller gets `SESSION_EXPIRED`. Tokens whose payload
    /// cannot be decoded are sent as-is and left for the backend to reject.
    fn bearer_token(&self) -> Result<Option<String>, ApiError> {
        let Some(stored) = storage::get_item(storage::TOKEN_KEY) else {
            return Ok(None);
        };
        if let Some(claims) = token::decode_claims(&stored) {
            if claims.is_expired(time::now_millis()) {
                log::info!("session token expired, logging out");
                self.force_logout();
                return Err(ApiError::session_expired());
            }
        }
        Ok(Some(stored))
    }

    /// Clears the persisted session and sends the user back to the login
    /// page. Idempotent.
    pub(crate) fn force_logout(&self) {
        storage::remove_item(storage::TOKEN_KEY);
        storage::remove_item(storage::USER_KEY);
        browser::redirect_to("/login");
    }

    /// Authenticated request. All role-gated endpoints go through here.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let token = self.bearer_token()?;
        let raw = self.send(method, path, body, token.as_deref()).await?;
        self.decode(raw)
    }

    /// Unauthenticated request, for the login flow.
    pub(crate) async fn request_public<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let raw = self.send(method, path, body, None).await?;
        self.decode(raw)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Result<RawResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}{}", base_url, path);

        let mut builder = self.client.request(method, &url);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }
        let request = builder
            .build()
            .map_err(|err| ApiError::request_failed(format!("Invalid request: {}", err)))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = mock::find_responder(request.url().as_str()) {
            let mocked = responder.respond(&request)?;
            return Ok(RawResponse {
                status: mocked.status,
                body: mocked.body,
            });
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|err| ApiError::request_failed(format!("Network error: {}", err)))?;
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        Ok(RawResponse { status, body })
    }

    fn decode<T: DeserializeOwned>(&self, raw: RawResponse) -> Result<T, ApiError> {
        match raw.status {
            200..=299 => serde_json::from_value(raw.body)
                .map_err(|err| ApiError::unknown(format!("Unexpected response shape: {}", err))),
            401 => {
                self.force_logout();
                Err(ApiError::session_expired())
            }
            403 => {
                self.force_logout();
                Err(ApiError::access_denied())
            }
            status => Err(error_from_body(status, &raw.body)),
        }
    }
}

fn error_from_body(status: u16, body: &Value) -> ApiError {
    let message = body
        .get("error")
        .and_then(Value::as_str)
        .or_else(|| body.get("message").and_then(Value::as_str));
    match message {
        Some(message) => ApiError {
            error: message.to_string(),
            code: body
                .get("code")
                .and_then(Value::as_str)
                .unwrap_or("REQUEST_FAILED")
                .to_string(),
            details: body.get("details").cloned(),
        },
        None => ApiError::request_failed(format!("Request failed with status {}", status)),
    }
}
