//! API module
//!
//! Router, CORS policy and HTTP request handlers.

pub mod files;
pub mod health;
pub mod middleware;

use crate::config::{AllowList, Config, CorsConfig};
use axum::{
    http::{HeaderName, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Build the application router with all middleware attached
pub fn router(config: &Config) -> Router {
    Router::new()
        .route("/list-files", get(files::list_files))
        .route("/health", get(health::health_check))
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(cors_layer(&config.cors))
}

/// Translate the CORS configuration into a tower-http layer
///
/// Browsers refuse a literal `*` on credentialed requests, so with
/// credentials enabled a wildcard mirrors whatever the request asked for.
pub fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let mirror = cors.allow_credentials;

    let origin = match &cors.allow_origins {
        AllowList::Any if mirror => AllowOrigin::mirror_request(),
        AllowList::Any => AllowOrigin::any(),
        AllowList::List(origins) => AllowOrigin::list(parse_values(origins, |o| {
            HeaderValue::from_str(o).ok()
        })),
    };

    let methods = match &cors.allow_methods {
        AllowList::Any if mirror => AllowMethods::mirror_request(),
        AllowList::Any => AllowMethods::any(),
        AllowList::List(methods) => AllowMethods::list(parse_values(methods, |m| {
            Method::from_bytes(m.to_ascii_uppercase().as_bytes()).ok()
        })),
    };

    let headers = match &cors.allow_headers {
        AllowList::Any if mirror => AllowHeaders::mirror_request(),
        AllowList::Any => AllowHeaders::any(),
        AllowList::List(headers) => AllowHeaders::list(parse_values(headers, |h| {
            HeaderName::from_bytes(h.as_bytes()).ok()
        })),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(cors.allow_credentials)
}

fn parse_values<T, F>(raw: &[String], parse: F) -> Vec<T>
where
    F: Fn(&str) -> Option<T>,
{
    raw.iter()
        .filter_map(|value| {
            let parsed = parse(value);
            if parsed.is_none() {
                tracing::warn!(value = %value, "Ignoring invalid CORS value");
            }
            parsed
        })
        .collect()
}
