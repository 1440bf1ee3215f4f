//! HTTP services
//!
//! Thin actix-web handlers over [`LinkService`](crate::services::LinkService).
//! All business invariants live in the service layer; this module only maps
//! requests and error values to status codes and JSON payloads.

pub mod services;
pub mod types;

use actix_web::web;

use services::{health, links, redirect};

/// Register the public routes. Shared between `main` and the integration
/// tests.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::welcome))
        .route("/", web::post().to(links::create_link))
        .route("/{link}/info", web::get().to(links::get_link_info))
        .route("/{link}", web::get().to(redirect::handle_redirect))
        .route("/{link}", web::delete().to(links::delete_link));
}
