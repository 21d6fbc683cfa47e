//! CORS middleware configuration for cross-origin requests.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use tracing::{info, warn};

use acct_shared::config::CorsConfig;

/// Creates a CORS middleware instance from configuration.
///
/// `*` in the origin list allows any origin; otherwise only the listed origins
/// are accepted. Unknown method names are skipped with a warning.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let methods: Vec<Method> = config
        .methods()
        .iter()
        .filter_map(|name| match Method::from_bytes(name.as_bytes()) {
            Ok(method) => Some(method),
            Err(_) => {
                warn!(method = %name, "ignoring unknown CORS method");
                None
            }
        })
        .collect();

    let mut cors = Cors::default()
        .allowed_methods(methods)
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        cors = cors.allow_any_origin();
    } else {
        for origin in config.origins() {
            info!(origin = %origin, "adding allowed origin");
            cors = cors.allowed_origin(&origin);
        }
    }

    cors
}
