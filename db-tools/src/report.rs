//! Standalone HTML database report.

use std::error::Error;
use std::fs;

use chrono::{DateTime, Utc};

use crate::db::{self, NoteRow};

const DEFAULT_OUTPUT: &str = "database_report.html";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub async fn run(output: Option<&str>) -> Result<(), Box<dyn Error>> {
    let client = db::connect().await?;
    let notes = db::fetch_all_notes(&client).await?;
    let path = output.unwrap_or(DEFAULT_OUTPUT);

    println!("Generating HTML database report...");

    fs::write(path, render_report(&notes, Utc::now()))?;

    println!("HTML report generated: {path}");
    println!("   - {} sticky notes", notes.len());

    Ok(())
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

pub fn render_report(notes: &[NoteRow], generated: DateTime<Utc>) -> String {
    let mut html = format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>Sticky Notes Database Report</title>
    <style>
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            line-height: 1.6;
            margin: 0;
            padding: 20px;
            background-color: #f5f5f5;
        }}
        .container {{
            max-width: 1200px;
            margin: 0 auto;
            background: white;
            padding: 30px;
            border-radius: 10px;
            box-shadow: 0 0 20px rgba(0,0,0,0.1);
        }}
        h1 {{
            color: #2c3e50;
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #3498db;
            padding-bottom: 10px;
        }}
        .export-info {{
            background: #ecf0f1;
            padding: 15px;
            border-radius: 5px;
            margin-bottom: 30px;
            text-align: center;
        }}
        .stats {{
            display: flex;
            justify-content: space-around;
            margin: 30px 0;
        }}
        .stat-box {{
            background: #3498db;
            color: white;
            padding: 20px;
            border-radius: 5px;
            text-align: center;
            min-width: 150px;
        }}
        .stat-number {{
            font-size: 2em;
            font-weight: bold;
        }}
        .note {{
            background: #fff9c4;
            border-left: 5px solid #f1c40f;
            padding: 15px;
            margin-bottom: 20px;
            border-radius: 5px;
        }}
        .note-title {{
            font-weight: bold;
            color: #2c3e50;
            font-size: 1.2em;
            margin-bottom: 10px;
        }}
        .note-content {{
            margin-bottom: 10px;
            white-space: pre-wrap;
        }}
        .note-meta {{
            font-size: 0.9em;
            color: #7f8c8d;
            border-top: 1px solid #ecf0f1;
            padding-top: 10px;
        }}
        .no-data {{
            text-align: center;
            color: #7f8c8d;
            font-style: italic;
            padding: 20px;
        }}
    </style>
</head>
<body>
    <div class=\"container\">
        <h1>Sticky Notes Database Report</h1>

        <div class=\"export-info\">
            <strong>Report Generated:</strong> {generated}
        </div>

        <div class=\"stats\">
            <div class=\"stat-box\">
                <div class=\"stat-number\">{count}</div>
                <div>Sticky Notes</div>
            </div>
        </div>
        <h2>Sticky Notes</h2>",
        generated = generated.format(TIME_FORMAT),
        count = notes.len(),
    );

    if notes.is_empty() {
        html.push_str("\n        <div class=\"no-data\">No sticky notes found.</div>");
    } else {
        for note in notes {
            html.push_str(&format!(
                "
        <div class=\"note\">
            <div class=\"note-title\">{title}</div>
            <div class=\"note-content\">{content}</div>
            <div class=\"note-meta\">
                <strong>ID:</strong> {id} |
                <strong>Created:</strong> {created} |
                <strong>Updated:</strong> {updated}
            </div>
        </div>",
                title = escape_html(&note.title),
                content = escape_html(&note.content),
                id = note.id,
                created = note.created_at.format(TIME_FORMAT),
                updated = note.updated_at.format(TIME_FORMAT),
            ));
        }
    }

    html.push_str(
        "
    </div>
</body>
</html>",
    );

    html
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn row(id: i64, title: &str, content: &str) -> NoteRow {
        NoteRow {
            id,
            title: title.to_string(),
            content: content.to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 9, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 1, 5, 18, 0, 0).unwrap(),
        }
    }

    #[test]
    fn report_contains_count_and_notes() {
        let notes = vec![row(1, "Groceries", "milk"), row(2, "Ideas", "none yet")];
        let html = render_report(&notes, Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap());

        assert!(html.contains("<div class=\"stat-number\">2</div>"));
        assert!(html.contains("Groceries"));
        assert!(html.contains("2026-01-01 09:30:00"));
        assert!(html.contains("2026-01-05 18:00:00"));
        assert!(html.contains("<strong>Report Generated:</strong> 2026-02-01 00:00:00"));
    }

    #[test]
    fn report_escapes_markup_in_fields() {
        let notes = vec![row(1, "<b>bold</b>", "a & b")];
        let html = render_report(&notes, Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap());

        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[test]
    fn empty_report_says_so() {
        let html = render_report(&[], Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap());
        assert!(html.contains("No sticky notes found."));
        assert!(html.contains("<div class=\"stat-number\">0</div>"));
    }
}
