use axum::Json;
use serde_json::{json, Value};

pub async fn root_get() -> Json<Value> {
    Json(json!({
        "message": "Instance Management API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "get_instances": "/api/v1/instances",
            "get_instance_by_id": "/api/v1/instances/{id}",
            "get_statistics": "/api/v1/instances/stats/overview",
            "get_roles": "/api/v1/instances/roles",
            "get_managers": "/api/v1/instances/managers",
            "get_types": "/api/v1/instances/types",
            "refresh": "/api/v1/instances/refresh",
            "health": "/health"
        }
    }))
}

/// Liveness probe; never touches the data file.
pub async fn health_get() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
