use chrono::{DateTime, Utc};
use tokio_postgres::{Client, NoTls};

pub struct NoteRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub async fn connect() -> Result<Client, Box<dyn std::error::Error>> {
    let database_dsn = std::env::var("PG_DSN")
        .map_err(|_| "database dsn must be provided as the PG_DSN ENV variable")?;

    let (client, con) = tokio_postgres::connect(&database_dsn, NoTls).await?;

    tokio::spawn(async move {
        if let Err(e) = con.await {
            tracing::error!("connection error: {}", e);
        }
    });

    Ok(client)
}

/// All notes in the application's canonical listing order.
pub async fn fetch_all_notes(client: &Client) -> Result<Vec<NoteRow>, tokio_postgres::Error> {
    let rows = client
        .query(
            "SELECT id, title, content, created_at, updated_at \
             FROM sticky_notes ORDER BY updated_at DESC, id",
            &[],
        )
        .await?;

    Ok(rows
        .iter()
        .map(|row| NoteRow {
            id: row.get("id"),
            title: row.get("title"),
            content: row.get("content"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
        .collect())
}
