//! Authentication-related DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Username/password pair used by register and login.
///
/// Both fields are optional on the wire; the auth service reports missing
/// or empty values with a single message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CredentialsRequest {
    #[schema(example = "alice")]
    pub username: Option<String>,
    #[schema(example = "s3cret")]
    pub password: Option<String>,
}

impl CredentialsRequest {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }
}

/// Token refresh request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RefreshTokenRequest {
    pub refresh: Option<String>,
}

/// Access and refresh tokens issued on login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub refresh: String,
    pub access: String,
}

/// New access token issued from a refresh token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccessTokenResponse {
    pub access: String,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
