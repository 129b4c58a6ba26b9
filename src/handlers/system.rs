use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{json, Value};

use crate::database::{models, Resource, ResourceVisitor};
use crate::error::ApiError;
use crate::routes::API_PREFIX;
use crate::state::AppState;

#[derive(Default)]
struct ResourcePaths(Vec<String>);

impl ResourceVisitor for ResourcePaths {
    fn visit<R: Resource>(&mut self) {
        self.0.push(format!("{}/{}", API_PREFIX, R::PATH));
    }
}

/// GET /
pub async fn root() -> Json<Value> {
    let mut paths = ResourcePaths::default();
    models::visit_all(&mut paths);

    Json(json!({
        "name": "School API",
        "version": env!("CARGO_PKG_VERSION"),
        "resources": paths.0,
    }))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let now = chrono::Utc::now();

    match state.db.health_check().await {
        Ok(()) => Ok((
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        )),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            Err(ApiError::service_unavailable(format!("database unavailable: {}", e)))
        }
    }
}

/// Fallback for paths no route matches
pub async fn not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
