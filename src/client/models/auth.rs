//! Authentication models

use serde::{Deserialize, Serialize};

/// Body of a successful `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,

    pub refresh_token: String,

    #[serde(default)]
    pub token_type: Option<String>,

    /// Present on current backends; older ones return tokens only
    #[serde(default)]
    pub user: Option<LoginUser>,
}

/// User block embedded in the login response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginUser {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub role: Option<String>,
}

/// Body of `POST /auth/refresh`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,

    #[serde(default)]
    pub token_type: Option<String>,
}

/// Account registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub password: String,
}

/// Public user record returned by `/auth/signup` and `/auth/me`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    pub role: String,
}

/// Generic `{ "message": ... }` acknowledgement.
///
/// `forgot-password` additionally echoes the reset token on development
/// backends that have no mail delivery.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_link: Option<String>,
}
