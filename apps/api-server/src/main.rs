//! # BMS API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer};
use tracing_actix_web::TracingLogger;

use api_server::observability::RequestIdMiddleware;
use api_server::telemetry::{TelemetryConfig, init_telemetry};
use api_server::{AppConfig, AppState, build_schema, configure_app};
use bms_infra::JwtTokenService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!("Starting BMS API Server on {}:{}", config.host, config.port);

    let state = AppState::new(&config, Arc::new(JwtTokenService::from_env())).await;
    let schema = build_schema(&state);

    tracing::info!(required_scope = %config.required_scope, "GraphQL schema ready at /graphql");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .configure(configure_app(state.clone(), schema.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
