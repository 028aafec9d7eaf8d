#[cfg(feature = "server")]
use std::time::Duration;

#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::client::SearchClient;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::render::ResultsRenderer;
#[cfg(feature = "server")]
use crate::routes::main::{search, show_index};

#[cfg(feature = "server")]
pub mod client;
pub mod domain;
pub mod dto;
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
pub mod render;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let client = SearchClient::new(
        &server_config.search_service_url,
        Duration::from_secs(server_config.request_timeout_secs),
    )
    .map_err(|e| std::io::Error::other(format!("Failed to build search client: {e}")))?;
    log::info!("Forwarding searches to {}", client.endpoint());

    let renderer = ResultsRenderer::new(server_config.card_layout)
        .map_err(|e| std::io::Error::other(format!("Result template error(s): {e}")))?;

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_index)
            .service(search)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(renderer.clone()))
            .app_data(web::Data::new(client.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
