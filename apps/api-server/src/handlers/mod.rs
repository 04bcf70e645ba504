//! HTTP handlers and route configuration.

mod graphql;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/graphql")
            .route("", web::post().to(graphql::execute))
            .route("", web::get().to(graphql::graphiql))
            .route("/schema", web::get().to(graphql::sdl)),
    )
    .service(web::scope("/api").route("/health", web::get().to(health::health_check)));
}
