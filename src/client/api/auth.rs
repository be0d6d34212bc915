//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{
    LoginResponse, MessageResponse, RefreshResponse, SignupRequest, UserProfile,
};
use crate::error::Result;

/// Authentication operations. Only [`AuthApi::me`] needs a token.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for an access/refresh token pair
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse>;

    /// Register a new account
    async fn signup(&self, request: &SignupRequest) -> Result<UserProfile>;

    /// Confirm a one-time code sent to `email`
    async fn verify_otp(&self, email: &str, otp: &str) -> Result<MessageResponse>;

    /// Ask the backend to send a fresh one-time code
    async fn resend_otp(&self, email: &str) -> Result<MessageResponse>;

    /// Start the password reset flow for `email`
    async fn forgot_password(&self, email: &str) -> Result<MessageResponse>;

    /// Set a new password using a reset token
    async fn reset_password(&self, token: &str, new_password: &str) -> Result<MessageResponse>;

    /// Trade a refresh token for a new access token
    async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse>;

    /// Fetch the profile behind an access token
    async fn me(&self, token: &str) -> Result<UserProfile>;
}
