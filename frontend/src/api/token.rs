//! Client-side JWT payload decoding. The signature is *not* verified here:
//! the claims only drive navigation and role gating, and every request is
//! re-authorized by the backend. Treat the decoded role as advisory.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Educator,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Educator => "educator",
            Role::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Educator => "Educator",
            Role::Admin => "Administrator",
        }
    }

    /// Landing route after a successful login.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Student => "/student",
            Role::Educator => "/educator",
            Role::Admin => "/admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Expiry as epoch seconds.
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    pub fn is_expired(&self, now_millis: i64) -> bool {
        self.exp * 1000 <= now_millis
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token is not a three-part JWT")]
    MissingPayload,
    #[error("payload is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("payload is not a valid claim set: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Decodes the claim set from a JWT, or `None` if the token is unreadable.
/// Never panics; the failure is logged and the caller treats the session as
/// unauthenticated.
pub fn decode_claims(token: &str) -> Option<Claims> {
    match try_decode_claims(token) {
        Ok(claims) => Some(claims),
        Err(err) => {
            log::warn!("discarding unreadable session token: {}", err);
            None
        }
    }
}

pub fn try_decode_claims(token: &str) -> Result<Claims, TokenError> {
    let payload = token.split('.').nth(1).ok_or(TokenError::MissingPayload)?;
    let decoded = URL_SAFE_NO_PAD.decode(payload)?;
    let text = String::from_utf8(decoded)?;
    Ok(serde_json::from_str(&text)?)
}
