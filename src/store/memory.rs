use crate::{Note, NoteStore};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

/// In-memory note store. A single mutex serializes all map access; the ID
/// counter is a separate atomic so generation never waits on the map lock.
#[derive(Debug)]
pub struct MemoryStore {
    notes: Mutex<HashMap<i64, Note>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    /// Creates an empty store. The first generated ID is 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            notes: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore for MemoryStore {
    fn next_id(&self) -> i64 {
        // fetch_add returns the pre-increment value, so the counter seed is
        // also the first ID handed out
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    fn put(&self, note: Note) {
        self.notes.lock().unwrap().insert(note.id, note);
    }

    fn get(&self, id: i64) -> Option<Note> {
        self.notes.lock().unwrap().get(&id).cloned()
    }

    fn remove(&self, id: i64) -> Option<Note> {
        self.notes.lock().unwrap().remove(&id)
    }

    fn all(&self) -> Vec<Note> {
        self.notes.lock().unwrap().values().cloned().collect()
    }
}
