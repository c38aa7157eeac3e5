//! Console database viewer.

use std::error::Error;
use std::fmt::Write as _;

use crate::db::{self, NoteRow};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub async fn run() -> Result<(), Box<dyn Error>> {
    let client = db::connect().await?;
    let notes = db::fetch_all_notes(&client).await?;

    print!("{}", render_listing(&notes));

    Ok(())
}

pub fn render_listing(notes: &[NoteRow]) -> String {
    let mut out = String::new();
    let rule = "=".repeat(60);

    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(out, "       STICKY NOTES DATABASE VIEWER");
    let _ = writeln!(out, "{rule}\n");

    if notes.is_empty() {
        let _ = writeln!(out, "No sticky notes found in database.");
    } else {
        for (i, note) in notes.iter().enumerate() {
            let _ = writeln!(out, "[{}] ID: {}", i + 1, note.id);
            let _ = writeln!(out, "    Title: {}", note.title);
            let _ = writeln!(out, "    Content: {}", note.content);
            let _ = writeln!(out, "    Created: {}", note.created_at.format(TIME_FORMAT));
            let _ = writeln!(out, "    Updated: {}", note.updated_at.format(TIME_FORMAT));
        }
        let _ = writeln!(out, "\nTotal sticky notes: {}", notes.len());
    }

    let _ = writeln!(out, "\n{rule}");

    out
}
