//! Access gate for admin routes: a per-request HTTP Basic credential check
//! against the configured constants. No sessions, no lockout, no hashing.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::error::ApiError;
use crate::state::AppState;

/// Extractor that rejects with 401 before the handler body runs unless the
/// request carries the admin credential pair.
pub struct RequireAdmin;

#[async_trait]
impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Unauthorized"))?;

        let (username, password) =
            decode_basic(header).ok_or_else(|| ApiError::unauthorized("Unauthorized"))?;

        let admin = &state.config.admin;
        if username != admin.username || password != admin.password {
            return Err(ApiError::unauthorized("Unauthorized"));
        }

        Ok(RequireAdmin)
    }
}

/// Decode an `Authorization: Basic <base64(user:pass)>` header value.
fn decode_basic(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let text = String::from_utf8(decoded).ok()?;
    let (username, password) = text.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(pair: &str) -> String {
        format!("Basic {}", BASE64.encode(pair))
    }

    #[test]
    fn decodes_well_formed_header() {
        let (user, pass) = decode_basic(&encode("admin:secret")).unwrap();
        assert_eq!(user, "admin");
        assert_eq!(pass, "secret");
    }

    #[test]
    fn password_may_contain_colons() {
        let (user, pass) = decode_basic(&encode("admin:a:b:c")).unwrap();
        assert_eq!(user, "admin");
        assert_eq!(pass, "a:b:c");
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(decode_basic("Bearer abc123").is_none());
    }

    #[test]
    fn rejects_undecodable_payloads() {
        assert!(decode_basic("Basic !!!not-base64!!!").is_none());
    }

    #[test]
    fn rejects_pairs_without_a_colon() {
        assert!(decode_basic(&encode("adminsecret")).is_none());
    }
}
