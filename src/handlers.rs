use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::error::ApiError;
use crate::models::Todo;
use crate::AppState;

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    tracing::info!("Fetching all todos");
    let todos = state.repo.find_all().map_err(|e| {
        tracing::error!(error = %e, "Error fetching todos");
        ApiError::Internal(format!("Failed to fetch todos: {e}"))
    })?;
    tracing::info!(count = todos.len(), "Successfully fetched todos");
    Ok(Json(todos))
}

pub async fn create_todo(
    State(state): State<AppState>,
    Json(todo): Json<Todo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    tracing::info!(text = %todo.text, "Creating new todo");
    if todo.text.trim().is_empty() {
        tracing::warn!("Attempted to create todo with empty text");
        return Err(ApiError::BadRequest("Todo text cannot be empty".to_string()));
    }

    let saved = state.repo.save(todo).map_err(|e| {
        tracing::error!(error = %e, "Error creating todo");
        ApiError::Internal(format!("Failed to create todo: {e}"))
    })?;
    tracing::info!(id = saved.id, "Successfully saved todo");
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn update_todo(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(mut todo): Json<Todo>,
) -> Result<Json<Todo>, ApiError> {
    tracing::info!(id, "Updating todo");
    // The path id is authoritative; saving under an unknown id creates the
    // record (upsert).
    todo.id = Some(id);
    let updated = state.repo.save(todo).map_err(|e| {
        tracing::error!(error = %e, id, "Error updating todo");
        ApiError::Internal(format!("Failed to update todo: {e}"))
    })?;
    tracing::info!(id, "Successfully updated todo");
    Ok(Json(updated))
}

pub async fn delete_todo(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    tracing::info!(id, "Deleting todo");
    // delete_by_id is a no-op on missing ids, so this succeeds either way.
    state.repo.delete_by_id(id).map_err(|e| {
        tracing::error!(error = %e, id, "Error deleting todo");
        ApiError::Internal(format!("Failed to delete todo: {e}"))
    })?;
    tracing::info!(id, "Successfully deleted todo");
    Ok(Json(json!({ "message": "Todo deleted successfully" })))
}
