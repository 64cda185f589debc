#![deny(clippy::cargo)]
#![deny(clippy::complexity)]
#![deny(clippy::correctness)]
#![deny(clippy::nursery)]
#![deny(clippy::perf)]
#![deny(clippy::style)]
#![deny(clippy::suspicious)]
#![deny(clippy::pedantic)]

use thiserror::Error;

pub mod service;
pub mod setup;
pub mod store;
pub mod web;

// More convenient Result type
pub type Result<T> = std::result::Result<T, NoteError>;

/// A stored note. `id` is `0` until the service assigns one at insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl Note {
    /// Creates a note without an ID, ready to be handed to [`service::NoteService::add`].
    #[must_use]
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: 0,
            title,
            content,
        }
    }
}

// Present-or-absent field carrier for partial updates. `None` leaves the
// stored value untouched; `Some` overwrites, including `Some("")` which
// clears the field.
#[derive(Debug, Clone, Default)]
pub struct NoteUpdate {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Trait to be implemented by all stores that hold notes and hand out fresh IDs
pub trait NoteStore {
    /// Returns a fresh note ID. IDs are strictly increasing, start at 1, and
    /// are never handed out twice, even under concurrent callers.
    fn next_id(&self) -> i64;

    /// Inserts or replaces the entry for `note.id`
    fn put(&self, note: Note);

    /// Fetches a copy of the note with the given ID, if present
    fn get(&self, id: i64) -> Option<Note>;

    /// Removes and returns the note with the given ID, or `None` if absent
    fn remove(&self, id: i64) -> Option<Note>;

    /// Returns all stored notes in unspecified order
    fn all(&self) -> Vec<Note>;
}

// Enum for all service-level errors. A single family: the target of a
// mutation does not exist.
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("Cannot delete. No note with ID: {0}")]
    DeleteNotFound(i64),

    #[error("Cannot update. No note with ID: {0}")]
    UpdateNotFound(i64),
}
