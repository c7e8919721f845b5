use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "parsume-api"
    }))
}
