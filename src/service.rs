use crate::{Note, NoteError, NoteStore, NoteUpdate, Result};
use log::trace;

pub struct NoteService {
    store: Box<dyn NoteStore + Send + Sync>,
}

impl NoteService {
    #[must_use]
    pub fn new(store: Box<dyn NoteStore + Send + Sync>) -> Self {
        Self { store }
    }

    // Retrieve every stored note. Order is unspecified.
    #[must_use]
    pub fn list_all(&self) -> Vec<Note> {
        self.store.all()
    }

    /// Assigns a fresh ID to `note`, stores it, and returns the stored copy.
    /// Always succeeds.
    pub fn add(&self, mut note: Note) -> Note {
        note.id = self.store.next_id();
        trace!("Storing new note with ID: {}", note.id);
        self.store.put(note.clone());
        note
    }

    /// Deletes the note with the given ID.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::DeleteNotFound` if no note with that ID exists.
    /// The store is left unchanged in that case.
    pub fn delete_by_id(&self, id: i64) -> Result<()> {
        match self.store.remove(id) {
            Some(_) => Ok(()),
            None => Err(NoteError::DeleteNotFound(id)),
        }
    }

    /// Applies a partial update to the note with `update.id`. Fields carrying
    /// `None` keep their stored value; fields carrying `Some` are overwritten,
    /// so `Some(String::new())` clears a field.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::UpdateNotFound` if no note with that ID exists.
    /// The store is left unchanged in that case.
    pub fn update(&self, update: NoteUpdate) -> Result<()> {
        let mut note = self
            .store
            .get(update.id)
            .ok_or(NoteError::UpdateNotFound(update.id))?;

        if let Some(title) = update.title {
            note.title = title;
        }
        if let Some(content) = update.content {
            note.content = content;
        }

        trace!("Updating note with ID: {}", note.id);
        self.store.put(note);
        Ok(())
    }
}
