//! # BMS API Server
//!
//! GraphQL over actix-web for the blog post service.

pub mod config;
pub mod graphql;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;

use actix_web::web;

pub use config::AppConfig;
pub use graphql::{AppSchema, build_schema};
pub use state::AppState;

/// Register state, schema and routes on an actix `App`.
pub fn configure_app(state: AppState, schema: AppSchema) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state))
            .app_data(web::Data::new(schema));
        handlers::configure_routes(cfg);
    }
}
