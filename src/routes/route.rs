use crate::controller::graphql::{graphql, graphql_get, not_found, GRAPHQL_ENDPOINT};
use actix_web::web;

/// Registers the GraphQL endpoint. There is no landing page; every other
/// path answers 404.
///
/// Expects a `web::Data<GraphqlState>` in the application data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(GRAPHQL_ENDPOINT)
            .route(web::post().to(graphql))
            .route(web::get().to(graphql_get)),
    )
    .default_service(web::to(not_found));
}
