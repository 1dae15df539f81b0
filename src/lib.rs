//! Axum HTTP API for the todo service.
//!
//! A single resource, `/api/todos`, backed by a pluggable
//! [`TodoRepository`](repository::TodoRepository). State is injectable so
//! tests can run the router against their own repository.

use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;

use repository::{InMemoryTodoRepository, TodoRepository};

/// Shared application state: the persistence collaborator.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn TodoRepository>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            repo: Arc::new(InMemoryTodoRepository::default()),
        }
    }
}

/// Builds the router with an in-memory repository.
pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// Builds the router over externally supplied state.
pub fn app_with_state(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/api/todos/:id",
            put(handlers::update_todo).delete(handlers::delete_todo),
        )
        .layer(cors)
        .with_state(state)
}
