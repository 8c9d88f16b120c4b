//! Router construction
//!
//! Wires every endpoint, the not-found fallback and the middleware stack
//! onto a single axum `Router`.

use crate::api;
use crate::state::SharedState;
use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
    routing::get,
    Router,
};
use std::time::Instant;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Endpoint table logged at startup
pub const ENDPOINTS: [(&str, &str); 6] = [
    ("GET", "/api/health"),
    ("GET", "/api/pets"),
    ("GET", "/api/pets/:id"),
    ("POST", "/api/pets"),
    ("PUT", "/api/pets/:id"),
    ("DELETE", "/api/pets/:id"),
];

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tag every request with a correlation id and log its outcome
///
/// A well-formed id supplied by the client is reused, otherwise a fresh
/// UUID is generated. Either way it is echoed back in `x-request-id`.
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty() && value.len() <= 128)
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let mut response = next
        .run(request)
        .instrument(info_span!("pet_request", %request_id, %method, %path))
        .await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    info!(
        %request_id,
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Handled request"
    );

    response
}

/// Build the application router over the given shared state
///
/// Unknown paths and unsupported methods on known paths both land on the
/// generic not-found handler.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route(
            "/api/health",
            get(api::health_check).fallback(api::endpoint_not_found),
        )
        .route(
            "/api/pets",
            get(api::pets::list_pets)
                .post(api::pets::create_pet)
                .fallback(api::endpoint_not_found),
        )
        .route(
            "/api/pets/:id",
            get(api::pets::get_pet)
                .put(api::pets::update_pet)
                .delete(api::pets::delete_pet)
                .fallback(api::endpoint_not_found),
        )
        .fallback(api::endpoint_not_found)
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
