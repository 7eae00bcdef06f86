use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::models::Activity;
use crate::registry::SharedRegistry;
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

pub async fn list_activities_handler(
    State(registry): State<SharedRegistry>,
) -> Json<HashMap<String, Activity>> {
    let registry = registry.read().await;
    Json(registry.all().clone())
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<Value>, ApiError> {
    let mut registry = registry.write().await;
    registry
        .signup(&activity_name, &query.email)
        .map_err(|e| {
            warn!("Signup failed for {} on {}: {}", query.email, activity_name, e);
            ApiError::from(e)
        })?;

    Ok(Json(serde_json::json!({
        "message": format!("Signed up {} for {}", query.email, activity_name)
    })))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<Value>, ApiError> {
    let mut registry = registry.write().await;
    registry
        .unregister(&activity_name, &query.email)
        .map_err(|e| {
            warn!(
                "Unregister failed for {} on {}: {}",
                query.email, activity_name, e
            );
            ApiError::from(e)
        })?;

    Ok(Json(serde_json::json!({
        "message": format!("Unregistered {} from {}", query.email, activity_name)
    })))
}
