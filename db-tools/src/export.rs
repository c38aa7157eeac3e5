//! JSON database export, the backup format shared by the one-off backup
//! scripts.

use std::error::Error;
use std::fs;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::db::{self, NoteRow};

const DEFAULT_OUTPUT: &str = "database_export.json";

pub async fn run(output: Option<&str>) -> Result<(), Box<dyn Error>> {
    let client = db::connect().await?;
    let notes = db::fetch_all_notes(&client).await?;
    let path = output.unwrap_or(DEFAULT_OUTPUT);

    println!("Exporting database to JSON...");

    let snapshot = snapshot(&notes, Utc::now());
    fs::write(path, serde_json::to_string_pretty(&snapshot)?)?;

    println!("Export completed: {path}");
    println!("   - {} sticky notes exported", notes.len());

    Ok(())
}

pub fn snapshot(notes: &[NoteRow], export_date: DateTime<Utc>) -> serde_json::Value {
    json!({
        "export_date": export_date.to_rfc3339(),
        "note_count": notes.len(),
        "sticky_notes": notes
            .iter()
            .map(|note| {
                json!({
                    "id": note.id,
                    "title": note.title,
                    "content": note.content,
                    "created_at": note.created_at.to_rfc3339(),
                    "updated_at": note.updated_at.to_rfc3339(),
                })
            })
            .collect::<Vec<_>>(),
    })
}
