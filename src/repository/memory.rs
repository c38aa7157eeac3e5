//! In-memory `NoteStore` used by the test suites. Mirrors the observable
//! contract of the PostgreSQL repository: id assignment, timestamp
//! handling and listing order.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use super::{NoteStore, StoreError};
use crate::models::{NewNote, Note};

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    failing: AtomicBool,
}

#[derive(Default)]
struct Inner {
    notes: Vec<Note>,
    next_id: i64,
}

impl MemoryStore {
    /// Makes every following operation report a storage fault.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }

    /// Pins a note's `updated_at`, for ordering tests.
    pub async fn set_updated_at(&self, id: i64, ts: DateTime<Utc>) {
        let mut inner = self.inner.lock().await;
        if let Some(note) = inner.notes.iter_mut().find(|n| n.id == id) {
            note.updated_at = ts;
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::Relaxed) {
            Err(StoreError("storage offline".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn create(&self, note: &NewNote) -> Result<Note, StoreError> {
        self.check()?;
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let now = Utc::now();
        let record = Note {
            id: inner.next_id,
            title: note.title.clone(),
            content: note.content.clone(),
            created_at: now,
            updated_at: now,
        };
        inner.notes.push(record.clone());
        Ok(record)
    }

    async fn get(&self, id: i64) -> Result<Option<Note>, StoreError> {
        self.check()?;
        let inner = self.inner.lock().await;
        Ok(inner.notes.iter().find(|n| n.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Note>, StoreError> {
        self.check()?;
        let inner = self.inner.lock().await;
        let mut notes = inner.notes.clone();
        notes.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(notes)
    }

    async fn update(&self, id: i64, note: &NewNote) -> Result<Option<Note>, StoreError> {
        self.check()?;
        let mut inner = self.inner.lock().await;
        let Some(record) = inner.notes.iter_mut().find(|n| n.id == id) else {
            return Ok(None);
        };
        record.title = note.title.clone();
        record.content = note.content.clone();
        record.updated_at = Utc::now();
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        self.check()?;
        let mut inner = self.inner.lock().await;
        let before = inner.notes.len();
        inner.notes.retain(|n| n.id != id);
        Ok(inner.notes.len() < before)
    }
}
