use tower_http::cors::{Any, CorsLayer};

/// The browser frontend is served from a different origin.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
