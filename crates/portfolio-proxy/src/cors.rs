//! Permissive CORS: the site is served from another origin.

use axum::body::Body;
use axum::extract::Request;
use axum::http::{header, Method, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use tower_http::cors::{Any, CorsLayer};

/// Any origin, the three methods the site uses, JSON bodies.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Every `OPTIONS` request ends in an empty 204, whether or not it carried
/// preflight headers. Sits outside [`cors_layer`] so its headers survive.
pub async fn options_no_content(request: Request, next: Next) -> Response {
    if request.method() != Method::OPTIONS {
        return next.run(request).await;
    }
    let (mut parts, _) = next.run(request).await.into_parts();
    parts.status = StatusCode::NO_CONTENT;
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.remove(header::CONTENT_TYPE);
    parts.headers.remove(header::ALLOW);
    Response::from_parts(parts, Body::empty())
}

