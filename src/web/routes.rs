//! Axum handlers binding the note routes to the service.
//!
//! Every mutation answers with a redirect back to the list page, so a
//! browser refresh never resubmits a form. Missing IDs map to 404.

use super::AppState;
use super::render;
use crate::{Note, NoteError, NoteUpdate};
use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use log::{debug, info};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct AddNoteForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNoteForm {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteNoteForm {
    pub id: i64,
}

// An empty form field means "leave unchanged", not "clear": HTML forms
// always submit every input, so emptiness is the only absence signal they
// can express. Clearing a field is reachable through the service API only.
impl From<UpdateNoteForm> for NoteUpdate {
    fn from(form: UpdateNoteForm) -> Self {
        Self {
            id: form.id,
            title: Some(form.title).filter(|title| !title.is_empty()),
            content: Some(form.content).filter(|content| !content.is_empty()),
        }
    }
}

impl IntoResponse for NoteError {
    fn into_response(self) -> Response {
        match self {
            Self::DeleteNotFound(_) | Self::UpdateNotFound(_) => {
                (StatusCode::NOT_FOUND, self.to_string()).into_response()
            }
        }
    }
}

// GET /
pub async fn index() -> Redirect {
    Redirect::to("/notes")
}

// GET /notes
pub async fn list_notes(State(state): State<Arc<AppState>>) -> Html<String> {
    let notes = state.service.list_all();
    debug!("Rendering list page with {} notes", notes.len());
    Html(render::notes_page(&notes))
}

// POST /notes/add
pub async fn add_note(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddNoteForm>,
) -> Redirect {
    let note = state.service.add(Note::new(form.title, form.content));
    info!("Added note with ID: {}", note.id);
    Redirect::to("/notes")
}

// POST /notes/update
pub async fn update_note(
    State(state): State<Arc<AppState>>,
    Form(form): Form<UpdateNoteForm>,
) -> Result<Redirect, NoteError> {
    let id = form.id;
    state.service.update(form.into())?;
    info!("Updated note with ID: {id}");
    Ok(Redirect::to("/notes"))
}

// POST /notes/delete
pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    Form(form): Form<DeleteNoteForm>,
) -> Result<Redirect, NoteError> {
    state.service.delete_by_id(form.id)?;
    info!("Deleted note with ID: {}", form.id);
    Ok(Redirect::to("/notes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;

    #[test]
    fn empty_form_fields_map_to_absent() {
        let form = UpdateNoteForm {
            id: 7,
            title: String::new(),
            content: "new content".to_string(),
        };

        let update = NoteUpdate::from(form);
        assert_eq!(update.id, 7);
        assert!(update.title.is_none());
        assert_eq!(update.content.as_deref(), Some("new content"));
    }

    #[test]
    fn filled_form_fields_map_to_present() {
        let form = UpdateNoteForm {
            id: 7,
            title: "t".to_string(),
            content: "c".to_string(),
        };

        let update = NoteUpdate::from(form);
        assert_eq!(update.title.as_deref(), Some("t"));
        assert_eq!(update.content.as_deref(), Some("c"));
    }

    #[tokio::test]
    async fn index_redirects_to_notes() {
        let response = index().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/notes");
    }

    #[test]
    fn not_found_errors_map_to_404() {
        let response = NoteError::DeleteNotFound(1).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = NoteError::UpdateNotFound(1).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
