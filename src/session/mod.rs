//! Session store
//!
//! Holds the logged-in user and their token pair. A `SessionStore` is
//! created once at startup with [`SessionStore::restore`], replaced on
//! login, and cleared on logout. It is the only writer of the persisted
//! session keys.

pub mod jwt;
mod role;
pub mod storage;

use log::debug;
use serde::Serialize;

use crate::client::AuthApi;
use crate::error::{AuthError, Result, ValidationError};
use crate::router::LOGIN_ROUTE;

pub use role::Role;
pub use storage::{FileStorage, SessionStorage};
#[cfg(test)]
pub use storage::MemoryStorage;
use storage::{
    ACCESS_TOKEN_KEY, EMAIL_KEY, LEGACY_ROLE_KEY, REFRESH_TOKEN_KEY, ROLE_KEY, SESSION_KEYS,
    USERNAME_KEY,
};

/// Role stored when the backend does not report one
const DEFAULT_ROLE: &str = "patient";

/// The logged-in user and their credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub username: String,
    pub email: String,
    /// `None` when the stored role is absent or not one the client knows
    pub role: Option<Role>,
    #[serde(skip)]
    pub access_token: String,
    #[serde(skip)]
    pub refresh_token: Option<String>,
}

/// Owner of the current session and its durable copy
#[derive(Debug)]
pub struct SessionStore<S: SessionStorage> {
    storage: S,
    current: Option<Session>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Rebuild the session from storage.
    ///
    /// Both the access token and the username must be present; anything less
    /// is treated as logged out.
    pub fn restore(storage: S) -> Self {
        let current = match (storage.get(ACCESS_TOKEN_KEY), storage.get(USERNAME_KEY)) {
            (Some(access_token), Some(username))
                if !access_token.is_empty() && !username.is_empty() =>
            {
                let role = storage
                    .get(ROLE_KEY)
                    .or_else(|| storage.get(LEGACY_ROLE_KEY))
                    .and_then(|r| Role::parse(&r));

                Some(Session {
                    username,
                    email: storage.get(EMAIL_KEY).unwrap_or_default(),
                    role,
                    access_token,
                    refresh_token: storage.get(REFRESH_TOKEN_KEY),
                })
            }
            _ => None,
        };

        debug!(
            "Restored session: {}",
            current
                .as_ref()
                .map(|s| s.username.as_str())
                .unwrap_or("<none>")
        );

        Self { storage, current }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Bearer token for resource calls
    pub fn access_token(&self) -> Result<&str> {
        self.current
            .as_ref()
            .map(|s| s.access_token.as_str())
            .ok_or_else(|| AuthError::NotLoggedIn.into())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Log in and persist the new session.
    ///
    /// All session keys are replaced in one storage update. On failure the
    /// previous session, if any, is left untouched in memory and on disk.
    pub async fn login<A>(&mut self, api: &A, username: &str, password: &str) -> Result<&Session>
    where
        A: AuthApi + ?Sized,
    {
        if username.trim().is_empty() {
            return Err(ValidationError::MissingField("username").into());
        }
        if password.is_empty() {
            return Err(ValidationError::MissingField("password").into());
        }

        let response = api.login(username, password).await?;
        let user = response.user.unwrap_or_default();

        let username = user.username.unwrap_or_else(|| username.to_string());
        let email = user.email.unwrap_or_default();
        let role = user.role.unwrap_or_else(|| DEFAULT_ROLE.to_string());

        self.storage.update(
            &SESSION_KEYS,
            &[
                (ACCESS_TOKEN_KEY, response.access_token.as_str()),
                (REFRESH_TOKEN_KEY, response.refresh_token.as_str()),
                (USERNAME_KEY, username.as_str()),
                (EMAIL_KEY, email.as_str()),
                (ROLE_KEY, role.as_str()),
            ],
        )?;

        debug!("Logged in as {} (role {})", username, role);

        Ok(&*self.current.insert(Session {
            username,
            email,
            role: Role::parse(&role),
            access_token: response.access_token,
            refresh_token: Some(response.refresh_token),
        }))
    }

    /// Swap the stored refresh token for a new access token
    pub async fn refresh<A>(&mut self, api: &A) -> Result<&Session>
    where
        A: AuthApi + ?Sized,
    {
        let refresh_token = self
            .current
            .as_ref()
            .ok_or(AuthError::NotLoggedIn)?
            .refresh_token
            .clone()
            .ok_or(AuthError::MissingRefreshToken)?;

        let response = api.refresh(&refresh_token).await?;
        self.storage.set(ACCESS_TOKEN_KEY, &response.access_token)?;

        let session = self.current.as_mut().ok_or(AuthError::NotLoggedIn)?;
        session.access_token = response.access_token;
        debug!("Refreshed access token for {}", session.username);
        Ok(&*session)
    }

    /// Forget the session locally and return the route to show next.
    ///
    /// The server is not contacted; issued tokens stay valid until they expire.
    pub fn logout(&mut self) -> Result<&'static str> {
        self.storage.clear(&SESSION_KEYS)?;

        if let Some(session) = self.current.take() {
            debug!("Logged out {}", session.username);
        }

        Ok(LOGIN_ROUTE)
    }
}
