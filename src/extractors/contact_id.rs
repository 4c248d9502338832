//! Extract and check the `:id` path segment of contact routes.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

pub const MAX_ID_LEN: usize = 64;

/// A syntactically valid contact id taken from the path. Ids that could never have been
/// allocated are rejected as not found, same as unknown ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactId(pub String);

impl ContactId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let valid = !raw.is_empty()
            && raw.len() <= MAX_ID_LEN
            && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(ContactId(raw.to_string()))
        } else {
            Err(AppError::NotFound(format!("contact {}", raw)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ContactId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        ContactId::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_uuid_like_ids() {
        let id = ContactId::parse("0b8f6a3e-2c1d-4e5f-8a9b-1c2d3e4f5a6b").unwrap();
        assert_eq!(id.as_str(), "0b8f6a3e-2c1d-4e5f-8a9b-1c2d3e4f5a6b");
        assert!(ContactId::parse("abc_123").is_ok());
    }

    #[test]
    fn rejects_odd_ids_as_not_found() {
        for raw in ["", "a b", "../etc", "x".repeat(MAX_ID_LEN + 1).as_str()] {
            assert!(matches!(ContactId::parse(raw), Err(AppError::NotFound(_))), "{raw:?}");
        }
    }
}
