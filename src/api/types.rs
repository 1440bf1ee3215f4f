//! Request/response types and error payload mapping for the HTTP layer.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::ShortgicError;
use crate::storage::Link;

#[derive(Debug, Clone, Deserialize)]
pub struct PostNewLink {
    pub target: String,
    #[serde(default)]
    pub extras: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkCreatedResponse {
    pub link: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkInfoResponse {
    pub link: String,
    pub target: String,
    pub extras: Option<serde_json::Value>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Link> for LinkInfoResponse {
    fn from(link: Link) -> Self {
        Self {
            link: link.link,
            target: link.target,
            extras: link.extras,
            created_at: link.created_at,
        }
    }
}

/// Map a service error to its HTTP response.
///
/// Payload shape is `{"error": <machine code>, "message": <human text>}`
/// with extra fields merged in where an error carries them.
pub fn error_response(err: &ShortgicError) -> HttpResponse {
    let (status, error_code) = match err {
        ShortgicError::InvalidFormat(_) => (StatusCode::BAD_REQUEST, "invalid_link_format"),
        ShortgicError::NotFound(_) => (StatusCode::NOT_FOUND, "link_not_found"),
        ShortgicError::DuplicateTarget(_) => (StatusCode::BAD_REQUEST, "duplicate_url"),
        ShortgicError::Validation(_) => (StatusCode::BAD_REQUEST, "invalid_url"),
        ShortgicError::AllocationExhausted(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "link_generation_failed")
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "persistence_failure"),
    };

    let body = match err {
        // The payload of a duplicate-target error is the existing
        // identifier; callers use it to avoid creating redundant links.
        ShortgicError::DuplicateTarget(existing_link) => json!({
            "error": error_code,
            "message": "link already registered",
            "existing_link": existing_link,
        }),
        _ => json!({
            "error": error_code,
            "message": err.message(),
        }),
    };

    HttpResponse::build(status).json(body)
}
