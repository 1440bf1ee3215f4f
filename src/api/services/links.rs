//! Link CRUD handlers: create, info, delete.

use actix_web::{HttpResponse, Responder, Result as ActixResult, web};
use tracing::{error, trace};

use crate::api::types::{LinkCreatedResponse, LinkInfoResponse, PostNewLink, error_response};
use crate::services::LinkService;

/// `POST /` - shorten a target URL.
pub async fn create_link(
    payload: web::Json<PostNewLink>,
    service: web::Data<LinkService>,
) -> ActixResult<impl Responder> {
    let payload = payload.into_inner();
    trace!("API: request to create link for target: {}", payload.target);

    match service.create(&payload.target, payload.extras).await {
        Ok(link) => Ok(HttpResponse::Created().json(LinkCreatedResponse { link: link.link })),
        Err(e) => {
            if e.is_server_fault() {
                error!("API: link creation failed: {}", e);
            }
            Ok(error_response(&e))
        }
    }
}

/// `GET /{link}/info` - fetch the stored record.
pub async fn get_link_info(
    path: web::Path<String>,
    service: web::Data<LinkService>,
) -> ActixResult<impl Responder> {
    let link = path.into_inner();

    match service.info(&link).await {
        Ok(record) => Ok(HttpResponse::Ok().json(LinkInfoResponse::from(record))),
        Err(e) => Ok(error_response(&e)),
    }
}

/// `DELETE /{link}` - hard removal.
pub async fn delete_link(
    path: web::Path<String>,
    service: web::Data<LinkService>,
) -> ActixResult<impl Responder> {
    let link = path.into_inner();

    match service.delete(&link).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => {
            if e.is_server_fault() {
                error!("API: link deletion failed: {}", e);
            }
            Ok(error_response(&e))
        }
    }
}
