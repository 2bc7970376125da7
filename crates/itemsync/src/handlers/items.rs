//! Item CRUD handlers.
//!
//! Handlers only decode input and encode output; all store interaction goes
//! through the item service.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use itemsync_core::item::{DeleteConfirmation, Item, ItemPayload};

use crate::{handlers::ApiError, state::AppState};

/// Treat an undecodable body as one without a name.
///
/// Missing bodies, non-JSON bodies and non-object JSON all end up as a
/// `name required` validation error instead of an extractor rejection.
fn payload_or_empty(payload: Result<Json<ItemPayload>, JsonRejection>) -> ItemPayload {
    match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            tracing::debug!(rejection = %rejection, "Undecodable item payload");
            ItemPayload::default()
        }
    }
}

/// List all items (GET /items).
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.items.list_items().await?;
    Ok(Json(items))
}

/// Get a single item by ID (GET /items/{id}).
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let item = state.items.get_item(&id).await?;
    Ok(Json(item))
}

/// Create a new item (POST /items).
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let payload = payload_or_empty(payload);
    let item = state.items.create_item(payload.name_or_empty()).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update an item by ID (PUT /items/{id}).
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let payload = payload_or_empty(payload);
    let item = state
        .items
        .update_item(&id, payload.name_or_empty())
        .await?;
    Ok(Json(item))
}

/// Delete an item by ID (DELETE /items/{id}).
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    let confirmation = state.items.delete_item(&id).await?;
    Ok(Json(confirmation))
}
