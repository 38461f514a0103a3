use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::Ack;
use service::entries::{Entry, EntryInput};
use tracing::warn;

use crate::errors::JsonApiError;
use crate::routes::AppState;

/// 列出全部日记
#[utoipa::path(get, path = "/entries", tag = "entries", responses(
    (status = 200, description = "All entries in insertion order", body = [crate::openapi::EntryDoc]),
    (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
))]
pub async fn list_entries(State(state): State<AppState>) -> Result<Json<Vec<Entry>>, JsonApiError> {
    state
        .entries
        .list()
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Failed to fetch entries"))
}

/// 创建日记
#[utoipa::path(post, path = "/entries", tag = "entries", request_body = crate::openapi::EntryInputDoc, responses(
    (status = 201, description = "Created", body = crate::openapi::EntryDoc),
    (status = 400, description = "Title or content missing", body = crate::openapi::ErrorDoc),
    (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
))]
pub async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<EntryInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Entry>), JsonApiError> {
    // unreadable or mistyped bodies count as missing fields
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            warn!(error = %rejection, "unreadable entry body");
            return Err(JsonApiError::from_service(state.entries.reject_create(), "Failed to create entry"));
        }
    };
    state
        .entries
        .create(input)
        .await
        .map(|entry| (StatusCode::CREATED, Json(entry)))
        .map_err(|e| JsonApiError::from_service(e, "Failed to create entry"))
}

/// 获取指定日记
#[utoipa::path(get, path = "/entries/{id}", tag = "entries", params(("id" = String, Path, description = "Entry id")), responses(
    (status = 200, description = "Found", body = crate::openapi::EntryDoc),
    (status = 404, description = "Entry not found", body = crate::openapi::ErrorDoc),
    (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
))]
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Entry>, JsonApiError> {
    state
        .entries
        .get(&id)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Failed to fetch entry"))
}

/// 更新指定日记
#[utoipa::path(put, path = "/entries/{id}", tag = "entries", params(("id" = String, Path, description = "Entry id")), request_body = crate::openapi::EntryInputDoc, responses(
    (status = 200, description = "Updated", body = crate::openapi::EntryDoc),
    (status = 400, description = "Title or content missing", body = crate::openapi::ErrorDoc),
    (status = 404, description = "Entry not found", body = crate::openapi::ErrorDoc),
    (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
))]
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EntryInput>, JsonRejection>,
) -> Result<Json<Entry>, JsonApiError> {
    // an unknown id is reported before a bad body
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            warn!(error = %rejection, entry_id = %id, "unreadable entry body");
            let e = state.entries.reject_update(&id).await;
            return Err(JsonApiError::from_service(e, "Failed to update entry"));
        }
    };
    state
        .entries
        .update(&id, input)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Failed to update entry"))
}

/// 删除指定日记
#[utoipa::path(delete, path = "/entries/{id}", tag = "entries", params(("id" = String, Path, description = "Entry id")), responses(
    (status = 200, description = "Deleted", body = crate::openapi::AckDoc),
    (status = 404, description = "Entry not found", body = crate::openapi::ErrorDoc),
    (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
))]
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Ack>, JsonApiError> {
    state
        .entries
        .delete(&id)
        .await
        .map(|()| Json(Ack::ok()))
        .map_err(|e| JsonApiError::from_service(e, "Failed to delete entry"))
}
