use std::sync::Arc;

use thiserror::Error;

use crate::{
    forms::{FieldErrors, NoteForm},
    models::Note,
    repository::{NoteStore, StoreError},
};

/// Outcome taxonomy for every note operation.
#[derive(Debug, Error)]
pub enum NoteError {
    /// Field-level failures. Recoverable: the caller re-renders the form
    /// with the messages.
    #[error("validation failed")]
    Validation(FieldErrors),
    /// Terminal per request. Never retried.
    #[error("note not found")]
    NotFound,
    /// Underlying storage fault. Surfaced, never retried, never swallowed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Orchestrates the note lifecycle over an injected store handle. All
/// creation, mutation and removal of notes flows through here.
#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    /// Validates and persists a new note. Nothing is written when
    /// validation fails.
    pub async fn create_note(&self, form: &NoteForm) -> Result<Note, NoteError> {
        let note = form.validate().map_err(NoteError::Validation)?;
        Ok(self.store.create(&note).await?)
    }

    pub async fn get_note(&self, id: i64) -> Result<Note, NoteError> {
        self.store.get(id).await?.ok_or(NoteError::NotFound)
    }

    /// All notes in canonical order: `updated_at` descending, insertion
    /// order on ties.
    pub async fn list_notes(&self) -> Result<Vec<Note>, NoteError> {
        Ok(self.store.list().await?)
    }

    /// Replaces the note's fields and refreshes its `updated_at`. A missing
    /// id is reported before field validation runs.
    pub async fn update_note(&self, id: i64, form: &NoteForm) -> Result<Note, NoteError> {
        if self.store.get(id).await?.is_none() {
            return Err(NoteError::NotFound);
        }
        let note = form.validate().map_err(NoteError::Validation)?;
        self.store.update(id, &note).await?.ok_or(NoteError::NotFound)
    }

    /// Hard delete. A second delete of the same id reports `NotFound`.
    pub async fn delete_note(&self, id: i64) -> Result<(), NoteError> {
        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(NoteError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::repository::memory::MemoryStore;

    fn service() -> (NoteService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        (NoteService::new(store.clone()), store)
    }

    fn form(title: &str, content: &str) -> NoteForm {
        NoteForm {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let (service, _) = service();

        let created = service.create_note(&form("Test Note", "hello")).await.unwrap();
        let fetched = service.get_note(created.id).await.unwrap();

        assert_eq!(fetched.title, "Test Note");
        assert_eq!(fetched.content, "hello");
        assert_eq!(fetched.created_at, fetched.updated_at);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn update_refreshes_updated_at_only() {
        let (service, _) = service();

        let created = service.create_note(&form("Test Note", "hello")).await.unwrap();
        let updated = service
            .update_note(created.id, &form("Test Note 2", "hello"))
            .await
            .unwrap();

        assert_eq!(updated.title, "Test Note 2");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let (service, _) = service();

        let created = service.create_note(&form("Test Note", "hello")).await.unwrap();
        service.delete_note(created.id).await.unwrap();

        assert!(matches!(
            service.get_note(created.id).await,
            Err(NoteError::NotFound)
        ));
        assert!(matches!(
            service.delete_note(created.id).await,
            Err(NoteError::NotFound)
        ));
    }

    #[tokio::test]
    async fn list_orders_by_updated_at_descending() {
        let (service, store) = service();

        let a = service.create_note(&form("A", "a")).await.unwrap();
        let b = service.create_note(&form("B", "b")).await.unwrap();
        let c = service.create_note(&form("C", "c")).await.unwrap();

        store
            .set_updated_at(a.id, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
            .await;
        store
            .set_updated_at(b.id, Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap())
            .await;
        store
            .set_updated_at(c.id, Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap())
            .await;

        let ids: Vec<i64> = service
            .list_notes()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec![b.id, c.id, a.id]);
    }

    #[tokio::test]
    async fn list_breaks_ties_by_insertion_order() {
        let (service, store) = service();

        let a = service.create_note(&form("A", "a")).await.unwrap();
        let b = service.create_note(&form("B", "b")).await.unwrap();

        let ts = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        store.set_updated_at(a.id, ts).await;
        store.set_updated_at(b.id, ts).await;

        let ids: Vec<i64> = service
            .list_notes()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn invalid_fields_persist_nothing() {
        let (service, _) = service();

        for (title, content) in [("", "content"), ("title", ""), ("", "")] {
            let err = service.create_note(&form(title, content)).await.unwrap_err();
            assert!(matches!(err, NoteError::Validation(_)));
        }

        assert!(service.list_notes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn oversized_title_persists_nothing() {
        let (service, _) = service();

        let err = service
            .create_note(&form(&"x".repeat(201), "content"))
            .await
            .unwrap_err();
        let NoteError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.title.len(), 1);
        assert!(service.list_notes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_id_wins_over_invalid_fields_on_update() {
        let (service, _) = service();

        assert!(matches!(
            service.update_note(9999, &form("", "")).await,
            Err(NoteError::NotFound)
        ));
    }

    #[tokio::test]
    async fn store_fault_is_surfaced() {
        let (service, store) = service();
        store.set_failing(true);

        assert!(matches!(
            service.list_notes().await,
            Err(NoteError::Store(_))
        ));
    }

    #[tokio::test]
    async fn full_lifecycle() {
        let (service, _) = service();

        let created = service.create_note(&form("Test Note", "hello")).await.unwrap();
        let detail = service.get_note(created.id).await.unwrap();
        assert_eq!(detail.title, "Test Note");
        assert_eq!(detail.content, "hello");

        let updated = service
            .update_note(created.id, &form("Test Note 2", "hello"))
            .await
            .unwrap();
        assert_eq!(updated.title, "Test Note 2");
        assert!(updated.updated_at >= updated.created_at);

        service.delete_note(created.id).await.unwrap();
        assert!(matches!(
            service.get_note(created.id).await,
            Err(NoteError::NotFound)
        ));
        assert!(
            !service
                .list_notes()
                .await
                .unwrap()
                .iter()
                .any(|n| n.id == created.id)
        );
    }
}
