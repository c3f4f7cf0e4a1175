use axum::http::{HeaderValue, Method};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

fn cors_layer(origins: &[String]) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any);
    }
    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(methods)
        .allow_headers(Any)
}

pub fn build_app(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_origins);
    Router::new()
        .route("/", get(handlers::system::root_get))
        .route("/health", get(handlers::system::health_get))
        .route("/api/v1/instances", get(handlers::instances::list_instances))
        .route("/api/v1/instances/", get(handlers::instances::list_instances))
        .route("/api/v1/instances/stats/overview", get(handlers::instances::statistics_overview))
        .route("/api/v1/instances/roles", get(handlers::instances::roles_list))
        .route("/api/v1/instances/managers", get(handlers::instances::managers_list))
        .route("/api/v1/instances/types", get(handlers::instances::os_types_list))
        .route("/api/v1/instances/refresh", post(handlers::instances::refresh_post))
        .route("/api/v1/instances/:instance_id", get(handlers::instances::instance_detail))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
