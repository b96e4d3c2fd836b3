//! Liveness endpoint

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe handler
///
/// Returns 200 with `{"status":"ok"}` whenever the process is serving.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_ok() {
        let Json(body) = health().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
