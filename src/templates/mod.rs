//! Server-rendered HTML pages. Every user-supplied value passes through
//! [`escape`] before it is interpolated.

use crate::forms::{FieldErrors, NoteForm};
use crate::models::Note;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const STYLE: &str = "\
body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    line-height: 1.6;
    margin: 0;
    padding: 20px;
    background-color: #f5f5f5;
}
.container {
    max-width: 900px;
    margin: 0 auto;
    background: white;
    padding: 30px;
    border-radius: 10px;
    box-shadow: 0 0 20px rgba(0,0,0,0.1);
}
h1 {
    color: #2c3e50;
    border-bottom: 3px solid #3498db;
    padding-bottom: 10px;
}
a { color: #3498db; }
.messages {
    background: #e8f6f3;
    border-left: 5px solid #27ae60;
    padding: 10px 15px;
    margin-bottom: 20px;
    border-radius: 5px;
}
.note {
    background: #fff9c4;
    border-left: 5px solid #f1c40f;
    padding: 15px;
    margin-bottom: 20px;
    border-radius: 5px;
}
.note-title {
    font-weight: bold;
    color: #2c3e50;
    font-size: 1.2em;
    margin-bottom: 10px;
}
.note-content {
    margin-bottom: 10px;
    white-space: pre-wrap;
}
.note-meta {
    font-size: 0.9em;
    color: #7f8c8d;
    border-top: 1px solid #ecf0f1;
    padding-top: 10px;
}
.no-data {
    text-align: center;
    color: #7f8c8d;
    font-style: italic;
    padding: 20px;
}
.form-control {
    width: 100%;
    box-sizing: border-box;
    padding: 8px;
    margin-bottom: 15px;
    border: 1px solid #bdc3c7;
    border-radius: 5px;
    font-family: inherit;
    font-size: 1em;
}
.errorlist {
    color: #c0392b;
    margin: 0 0 5px 0;
    padding-left: 20px;
}
.actions { margin-top: 20px; }
.button {
    display: inline-block;
    background: #3498db;
    color: white;
    border: none;
    padding: 8px 16px;
    border-radius: 5px;
    font-size: 1em;
    text-decoration: none;
    cursor: pointer;
}
.button.danger { background: #c0392b; }
";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, flash: Option<&str>, body: &str) -> String {
    let flash_banner = flash.map_or_else(String::new, |message| {
        format!("<div class=\"messages\">{}</div>\n", escape(message))
    });

    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>{title} - Sticky Notes</title>
    <style>{STYLE}</style>
</head>
<body>
    <div class=\"container\">
{flash_banner}{body}
    </div>
</body>
</html>",
        title = escape(title),
    )
}

fn note_meta(note: &Note) -> String {
    format!(
        "<div class=\"note-meta\">\
         <strong>ID:</strong> {} | \
         <strong>Created:</strong> {} | \
         <strong>Updated:</strong> {}\
         </div>",
        note.id,
        note.created_at.format(TIME_FORMAT),
        note.updated_at.format(TIME_FORMAT),
    )
}

pub fn note_list_page(notes: &[Note], flash: Option<&str>) -> String {
    let mut body = String::from("<h1>Sticky Notes</h1>\n");
    body.push_str("<p><a class=\"button\" href=\"/create/\">New Note</a></p>\n");

    if notes.is_empty() {
        body.push_str("<div class=\"no-data\">No sticky notes found.</div>\n");
    } else {
        for note in notes {
            body.push_str(&format!(
                "<div class=\"note\">\
                 <div class=\"note-title\"><a href=\"/note/{id}/\">{title}</a></div>\
                 <div class=\"note-content\">{content}</div>\
                 {meta}\
                 </div>\n",
                id = note.id,
                title = escape(&note.title),
                content = escape(&note.content),
                meta = note_meta(note),
            ));
        }
    }

    layout("Notes", flash, &body)
}

pub fn note_detail_page(note: &Note, flash: Option<&str>) -> String {
    let body = format!(
        "<h1>{title}</h1>
<div class=\"note\">
<div class=\"note-content\">{content}</div>
{meta}
</div>
<div class=\"actions\">
<a class=\"button\" href=\"/note/{id}/edit/\">Edit</a>
<a class=\"button danger\" href=\"/note/{id}/delete/\">Delete</a>
<a href=\"/\">Back to list</a>
</div>",
        title = escape(&note.title),
        content = escape(&note.content),
        meta = note_meta(note),
        id = note.id,
    );

    layout(&note.title, flash, &body)
}

fn errorlist(messages: &[String]) -> String {
    if messages.is_empty() {
        return String::new();
    }
    let items: String = messages
        .iter()
        .map(|m| format!("<li>{}</li>", escape(m)))
        .collect();
    format!("<ul class=\"errorlist\">{items}</ul>")
}

pub fn note_form_page(
    page_title: &str,
    action: &str,
    form: &NoteForm,
    errors: &FieldErrors,
) -> String {
    let body = format!(
        "<h1>{page_title}</h1>
<form method=\"post\" action=\"{action}\">
<label for=\"id_title\">Title</label>
{title_errors}
<input class=\"form-control\" type=\"text\" name=\"title\" id=\"id_title\" \
placeholder=\"Enter note title...\" maxlength=\"200\" value=\"{title}\">
<label for=\"id_content\">Content</label>
{content_errors}
<textarea class=\"form-control\" name=\"content\" id=\"id_content\" rows=\"6\" \
placeholder=\"Write your note content here...\">{content}</textarea>
<div class=\"actions\">
<button class=\"button\" type=\"submit\">Save</button>
<a href=\"/\">Cancel</a>
</div>
</form>",
        page_title = escape(page_title),
        action = escape(action),
        title_errors = errorlist(&errors.title),
        content_errors = errorlist(&errors.content),
        title = escape(&form.title),
        content = escape(&form.content),
    );

    layout(page_title, None, &body)
}

pub fn confirm_delete_page(note: &Note) -> String {
    let body = format!(
        "<h1>Delete Note</h1>
<p>Are you sure you want to delete \"{title}\"?</p>
<div class=\"note\">
<div class=\"note-title\">{title}</div>
<div class=\"note-content\">{content}</div>
{meta}
</div>
<form method=\"post\" action=\"/note/{id}/delete/\">
<div class=\"actions\">
<button class=\"button danger\" type=\"submit\">Delete</button>
<a href=\"/note/{id}/\">Cancel</a>
</div>
</form>",
        title = escape(&note.title),
        content = escape(&note.content),
        meta = note_meta(note),
        id = note.id,
    );

    layout("Delete Note", None, &body)
}

pub fn not_found_page() -> String {
    layout(
        "Not Found",
        None,
        "<h1>Not Found</h1>\n<p>The requested note does not exist.</p>\n<p><a href=\"/\">Back to list</a></p>",
    )
}

pub fn server_error_page() -> String {
    layout(
        "Server Error",
        None,
        "<h1>Server Error</h1>\n<p>A storage error occurred while handling the request.</p>",
    )
}
