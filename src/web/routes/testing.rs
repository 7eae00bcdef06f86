use axum::{extract::State, Json};
use serde_json::Value;

use crate::registry::SharedRegistry;

/// Restores the seed catalog so external test runs start from a known state.
/// Test-harness collaborator only; the product surface is the routes in
/// `activities`.
pub async fn reset_activities_handler(State(registry): State<SharedRegistry>) -> Json<Value> {
    let mut registry = registry.write().await;
    registry.reset();
    Json(serde_json::json!({ "message": "Activities reset to seed state" }))
}
