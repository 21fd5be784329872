use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::api::server::AppState;
use crate::db::{Class, NewClass};

pub async fn list_classes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Class>>, ApiError> {
    Ok(Json(state.store.get_classes().await?))
}

pub async fn get_class(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Class>, ApiError> {
    state
        .store
        .get_class(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound { resource: "class", id })
}

pub async fn create_class(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewClass>,
) -> Result<(StatusCode, Json<Class>), ApiError> {
    let class = state.store.create_class(payload).await?;
    Ok((StatusCode::CREATED, Json(class)))
}
