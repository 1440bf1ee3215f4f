//! Redirect handler: resolve an identifier and send the caller to the
//! stored target.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use tracing::debug;

use crate::api::types::error_response;
use crate::errors::ShortgicError;
use crate::services::LinkService;

/// `GET /{link}` - 302 redirect to the stored target URL.
pub async fn handle_redirect(
    path: web::Path<String>,
    service: web::Data<LinkService>,
) -> impl Responder {
    let link = path.into_inner();

    match service.resolve(&link).await {
        Ok(target) => HttpResponse::Found()
            .insert_header(("Location", target))
            .finish(),
        Err(ShortgicError::NotFound(_)) => {
            debug!("Redirect link not found: {}", link);
            HttpResponse::build(StatusCode::NOT_FOUND)
                .insert_header(("Content-Type", "text/html; charset=utf-8"))
                .insert_header(("Cache-Control", "public, max-age=60"))
                .body("Not Found")
        }
        Err(e) => error_response(&e),
    }
}
