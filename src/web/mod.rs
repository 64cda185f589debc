pub mod render;
pub mod routes;

use crate::service::NoteService;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

/// Shared state handed to every handler
pub struct AppState {
    pub service: NoteService,
}

/// Builds the application router with all note routes wired to `state`.
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/notes", get(routes::list_notes))
        .route("/notes/add", post(routes::add_note))
        .route("/notes/update", post(routes::update_note))
        .route("/notes/delete", post(routes::delete_note))
        .with_state(state)
}
