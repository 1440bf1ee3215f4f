use actix_web::{App, HttpServer, web};
use tracing::info;

use shortgic::api;
use shortgic::config::AppConfig;
use shortgic::services::LinkService;
use shortgic::storage::StorageFactory;
use shortgic::system::init_logging;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load();

    // Guard must stay alive so buffered log writes are flushed on exit
    let _log_guard = init_logging(&config.logging);

    let store = StorageFactory::create(&config.database)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Failed to initialize storage: {}", e);
            std::process::exit(1);
        });
    info!("Using storage backend: {}", store.backend_name().await);

    let service = web::Data::new(LinkService::new(store, config.links));

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .configure(api::configure_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}
