//! Request extractors

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use mylearn_domain::constants::USER_ID_HEADER;
use mylearn_domain::UserServiceError;
use tracing::error;
use uuid::Uuid;

use crate::error::ApiError;

/// Identifier of the authenticated caller, read from the trusted header the
/// gateway injects. Only the syntax is checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerId(pub Uuid);

impl<S> FromRequestParts<S> for CallerId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(USER_ID_HEADER) else {
            error!(header = USER_ID_HEADER, "Trusted identity header missing");
            return Err(UserServiceError::InvalidInput(format!("Missing {USER_ID_HEADER} header."))
                .into());
        };

        let raw = value.to_str().unwrap_or_default();
        parse_user_id(raw).map(CallerId).map_err(|err| {
            error!(header = USER_ID_HEADER, value = raw, "Invalid UUID format received in header");
            err.into()
        })
    }
}

/// Parse a user identifier supplied by the caller
pub fn parse_user_id(raw: &str) -> Result<Uuid, UserServiceError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| UserServiceError::InvalidInput("Invalid user ID format.".into()))
}
