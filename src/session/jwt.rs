//! Best-effort JWT inspection for status output.
//!
//! The signature is never checked and nothing here gates a request; the
//! backend remains the only authority on token validity.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Decode base64url (URL-safe base64 without padding)
fn base64_decode_url(input: &str) -> Option<Vec<u8>> {
    use base64::{Engine as _, engine::general_purpose};

    general_purpose::URL_SAFE_NO_PAD
        .decode(input.trim_end_matches('='))
        .ok()
}

#[derive(Deserialize)]
struct Claims {
    exp: Option<i64>,
}

/// Read the `exp` claim from a `header.payload.signature` token
pub fn expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut parts = token.split('.');
    let (_, payload, _) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let bytes = base64_decode_url(payload)?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    DateTime::from_timestamp(claims.exp?, 0)
}
