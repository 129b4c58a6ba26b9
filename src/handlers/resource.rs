//! Generic List/Create/Get/Update/Delete controller. One instantiation per
//! resource type is mounted by `routes::resource_routes`.

use axum::{
    body::Bytes,
    extract::{Path, State},
};
use tracing::debug;

use crate::database::{Resource, ResourceKey};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, Listing};
use crate::state::AppState;

/// A key that does not parse for this resource cannot name a stored row.
fn parse_key<R: Resource>(raw: &str) -> Result<R::Key, ApiError> {
    <R::Key as ResourceKey>::parse_key(raw)
        .ok_or_else(|| ApiError::not_found(format!("{} {} not found", R::NAME, raw)))
}

fn parse_payload<R: Resource>(body: &[u8]) -> Result<R, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

/// GET /api/v1/:resource
pub async fn list<R: Resource>(State(state): State<AppState>) -> ApiResult<Listing<R>> {
    let items = state.repository::<R>().select_all().await?;
    Ok(ApiResponse::listing(items))
}

/// POST /api/v1/:resource
pub async fn create<R: Resource>(State(state): State<AppState>, body: Bytes) -> ApiResult<R> {
    let input = parse_payload::<R>(&body)?;
    let created = state.repository::<R>().insert(&input).await?;
    debug!("Created {} {}", R::NAME, created.key());
    Ok(ApiResponse::created(created))
}

/// GET /api/v1/:resource/:key
pub async fn get<R: Resource>(
    State(state): State<AppState>,
    Path(raw_key): Path<String>,
) -> ApiResult<R> {
    let key = parse_key::<R>(&raw_key)?;
    let item = state.repository::<R>().select_404(&key).await?;
    Ok(ApiResponse::success(item))
}

/// PUT /api/v1/:resource/:key
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(raw_key): Path<String>,
    body: Bytes,
) -> ApiResult<R> {
    let key = parse_key::<R>(&raw_key)?;
    let repository = state.repository::<R>();

    let mut item = repository.select_404(&key).await?;
    let input = parse_payload::<R>(&body)?;
    item.apply_update(input);

    let updated = repository.update(&item).await?;
    debug!("Updated {} {}", R::NAME, key);
    Ok(ApiResponse::success(updated))
}

/// DELETE /api/v1/:resource/:key
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(raw_key): Path<String>,
) -> ApiResult<()> {
    let key = parse_key::<R>(&raw_key)?;
    let removed = state.repository::<R>().delete(&key).await?;
    debug!("Deleted {} {} ({} rows)", R::NAME, key, removed);
    Ok(ApiResponse::no_content())
}
