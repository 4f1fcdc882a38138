//! Middleware de CORS
//!
//! Este módulo maneja la configuración de CORS para permitir
//! requests desde diferentes orígenes.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::owner::OWNER_HEADER;

/// Crear middleware de CORS a partir de los orígenes configurados.
/// Sin orígenes se permite cualquiera (desarrollo).
pub fn cors_middleware(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::very_permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static(OWNER_HEADER),
        ])
        .max_age(std::time::Duration::from_secs(3600))
}
