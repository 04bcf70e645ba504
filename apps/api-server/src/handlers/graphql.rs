//! GraphQL endpoints.

use actix_web::{HttpResponse, web};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::graphql::AppSchema;
use crate::middleware::OptionalIdentity;

/// POST /graphql
///
/// The caller's identity, if any, is handed to resolvers as request data.
pub async fn execute(
    schema: web::Data<AppSchema>,
    identity: OptionalIdentity,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    if let Some(identity) = identity.0 {
        request = request.data(identity);
    }

    schema.execute(request).await.into()
}

/// GET /graphql
pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// GET /graphql/schema
pub async fn sdl(schema: web::Data<AppSchema>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(schema.sdl())
}
