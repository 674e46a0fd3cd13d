use crate::utils::config::CorsConfig;
use actix_cors::Cors;

/// Cross-origin policy for the GraphQL endpoint.
///
/// Origins are matched byte-for-byte against the allow-list, so entries that
/// are not full origins (such as a bare host name) only match a request
/// sending exactly that value. Rejection of other origins is left to
/// actix-cors.
pub fn cors(config: &CorsConfig) -> Cors {
    let origins = config.allowed_origins.clone();

    let cors = Cors::default()
        .allowed_origin_fn(move |origin, _req_head| {
            origins.iter().any(|allowed| origin.as_bytes() == allowed.as_bytes())
        })
        .allowed_methods(config.allowed_methods.iter().map(String::as_str))
        .allowed_headers(config.allowed_headers.iter().map(String::as_str));

    if config.supports_credentials {
        cors.supports_credentials()
    } else {
        cors
    }
}
