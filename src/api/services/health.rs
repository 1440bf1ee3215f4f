//! Service liveness endpoint.

use actix_web::{HttpResponse, Responder};
use serde_json::json;

/// `GET /` - welcome greeting, usable as a liveness probe.
pub async fn welcome() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "hello": { "msg": "welcome on shortgic" }
    }))
}
