mod embedded;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use embedded::migrations;
use thiserror::Error;

use tokio_postgres::{Client, NoTls, Row};

use crate::models::{NewNote, Note};

/// Underlying storage failure. Callers surface it as a distinct outcome,
/// never retry it and never swallow it.
#[derive(Debug, Error)]
#[error("storage error: {0}")]
pub struct StoreError(pub String);

impl From<tokio_postgres::Error> for StoreError {
    fn from(e: tokio_postgres::Error) -> Self {
        Self(e.to_string())
    }
}

/// Keyed note storage with the ordering and uniqueness guarantees the rest
/// of the application relies on.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Persists a new note, assigning its id and setting both timestamps to
    /// the same instant.
    async fn create(&self, note: &NewNote) -> Result<Note, StoreError>;

    async fn get(&self, id: i64) -> Result<Option<Note>, StoreError>;

    /// All notes, most recently updated first. Equal timestamps keep
    /// insertion order.
    async fn list(&self) -> Result<Vec<Note>, StoreError>;

    /// Replaces title and content and refreshes `updated_at` to the current
    /// time as part of the same statement. `created_at` is never touched.
    /// Returns `None` when the id is absent.
    async fn update(&self, id: i64, note: &NewNote) -> Result<Option<Note>, StoreError>;

    /// Removes the note permanently. Returns `false` when the id is absent,
    /// so a repeated delete reports the miss instead of succeeding.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}

pub struct PgRepository {
    client: Client,
}

impl PgRepository {
    pub async fn new(database_dsn: String) -> Result<Self, tokio_postgres::Error> {
        let (client, con) = tokio_postgres::connect(&database_dsn, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    pub async fn migrate(&mut self) -> Result<(), refinery::Error> {
        let migrations_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished!");

        Ok(())
    }

    fn note_from_row(row: &Row) -> Note {
        Note {
            id: row.get("id"),
            title: row.get("title"),
            content: row.get("content"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}

#[async_trait]
impl NoteStore for PgRepository {
    async fn create(&self, note: &NewNote) -> Result<Note, StoreError> {
        let row = self.client.query_one(
            "INSERT INTO sticky_notes (title, content) VALUES ($1, $2) \
             RETURNING id, title, content, created_at, updated_at",
            &[&note.title, &note.content],
        ).await?;

        Ok(Self::note_from_row(&row))
    }

    async fn get(&self, id: i64) -> Result<Option<Note>, StoreError> {
        let row = self
            .client
            .query_opt(
                "SELECT id, title, content, created_at, updated_at \
                 FROM sticky_notes WHERE id = $1",
                &[&id],
            )
            .await?;

        Ok(row.as_ref().map(Self::note_from_row))
    }

    async fn list(&self) -> Result<Vec<Note>, StoreError> {
        let rows = self
            .client
            .query(
                "SELECT id, title, content, created_at, updated_at \
                 FROM sticky_notes ORDER BY updated_at DESC, id",
                &[],
            )
            .await?;

        Ok(rows.iter().map(Self::note_from_row).collect())
    }

    async fn update(&self, id: i64, note: &NewNote) -> Result<Option<Note>, StoreError> {
        let row = self.client.query_opt(
            "UPDATE sticky_notes SET title = $1, content = $2, updated_at = now() \
             WHERE id = $3 RETURNING id, title, content, created_at, updated_at",
            &[&note.title, &note.content, &id],
        ).await?;

        Ok(row.as_ref().map(Self::note_from_row))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let rows = self
            .client
            .execute("DELETE FROM sticky_notes WHERE id = $1", &[&id])
            .await?;

        Ok(rows == 1)
    }
}
