use axum::{response::Result, Json};
use chrono::Utc;
use serde_json::{json, Value};

pub async fn health_check() -> Result<Json<Value>> {
    Ok(Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": "sightline-cli"
    })))
}
