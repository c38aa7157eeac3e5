use axum::{
    Form,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_macros::debug_handler;

use std::sync::Arc;

use crate::{
    forms::{FieldErrors, NoteForm},
    service::{NoteError, NoteService},
    templates,
};

/// Success notifications ride a short-lived cookie across the redirect and
/// are shown once by the next rendered page.
const FLASH_COOKIE: &str = "flash";

fn flash_cookie(token: &str) -> [(header::HeaderName, String); 1] {
    [(
        header::SET_COOKIE,
        format!("{FLASH_COOKIE}={token}; Path=/; Max-Age=60; HttpOnly"),
    )]
}

fn clear_flash_cookie() -> [(header::HeaderName, String); 1] {
    [(
        header::SET_COOKIE,
        format!("{FLASH_COOKIE}=; Path=/; Max-Age=0; HttpOnly"),
    )]
}

fn flash_message(headers: &HeaderMap) -> Option<&'static str> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name != FLASH_COOKIE {
            return None;
        }
        match value {
            "note-created" => Some("Note created successfully!"),
            "note-updated" => Some("Note updated successfully!"),
            "note-deleted" => Some("Note deleted successfully!"),
            _ => None,
        }
    })
}

fn page(html: String) -> Response {
    Html(html).into_response()
}

fn page_with_flash(headers: &HeaderMap, render: impl FnOnce(Option<&str>) -> String) -> Response {
    match flash_message(headers) {
        Some(message) => (clear_flash_cookie(), Html(render(Some(message)))).into_response(),
        None => Html(render(None)).into_response(),
    }
}

fn redirect_with_flash(location: &str, token: &str) -> Response {
    (flash_cookie(token), Redirect::to(location)).into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(templates::not_found_page())).into_response()
}

fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(templates::server_error_page()),
    )
        .into_response()
}

/// GET / — all notes, most recently updated first.
#[debug_handler]
pub async fn note_list(State(service): State<Arc<NoteService>>, headers: HeaderMap) -> Response {
    match service.list_notes().await {
        Ok(notes) => page_with_flash(&headers, |flash| templates::note_list_page(&notes, flash)),
        Err(e) => {
            tracing::error!("failed to list notes: {e}");
            server_error()
        }
    }
}

/// GET /note/{id}/
#[debug_handler]
pub async fn note_detail(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    match service.get_note(id).await {
        Ok(note) => page_with_flash(&headers, |flash| templates::note_detail_page(&note, flash)),
        Err(NoteError::NotFound) => not_found(),
        Err(e) => {
            tracing::error!("failed to load note {id}: {e}");
            server_error()
        }
    }
}

/// GET /create/ — empty form.
#[debug_handler]
pub async fn note_create_form() -> Response {
    page(templates::note_form_page(
        "Create New Note",
        "/create/",
        &NoteForm::default(),
        &FieldErrors::default(),
    ))
}

/// POST /create/ — validate, persist, redirect to the new note. Validation
/// failures re-render the form with the submitted values; nothing is
/// persisted.
#[debug_handler]
pub async fn note_create(
    State(service): State<Arc<NoteService>>,
    Form(form): Form<NoteForm>,
) -> Response {
    match service.create_note(&form).await {
        Ok(note) => redirect_with_flash(&format!("/note/{}/", note.id), "note-created"),
        Err(NoteError::Validation(errors)) => page(templates::note_form_page(
            "Create New Note",
            "/create/",
            &form,
            &errors,
        )),
        Err(e) => {
            tracing::error!("failed to create note: {e}");
            server_error()
        }
    }
}

/// GET /note/{id}/edit/ — form pre-filled with the stored values.
#[debug_handler]
pub async fn note_update_form(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
) -> Response {
    match service.get_note(id).await {
        Ok(note) => {
            let form = NoteForm {
                title: note.title,
                content: note.content,
            };
            page(templates::note_form_page(
                "Edit Note",
                &format!("/note/{id}/edit/"),
                &form,
                &FieldErrors::default(),
            ))
        }
        Err(NoteError::NotFound) => not_found(),
        Err(e) => {
            tracing::error!("failed to load note {id}: {e}");
            server_error()
        }
    }
}

/// POST /note/{id}/edit/ — a missing id is a 404 even when the submitted
/// fields are invalid.
#[debug_handler]
pub async fn note_update(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
    Form(form): Form<NoteForm>,
) -> Response {
    match service.update_note(id, &form).await {
        Ok(note) => redirect_with_flash(&format!("/note/{}/", note.id), "note-updated"),
        Err(NoteError::Validation(errors)) => page(templates::note_form_page(
            "Edit Note",
            &format!("/note/{id}/edit/"),
            &form,
            &errors,
        )),
        Err(NoteError::NotFound) => not_found(),
        Err(e) => {
            tracing::error!("failed to update note {id}: {e}");
            server_error()
        }
    }
}

/// GET /note/{id}/delete/ — confirmation page showing the note.
#[debug_handler]
pub async fn note_delete_confirm(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
) -> Response {
    match service.get_note(id).await {
        Ok(note) => page(templates::confirm_delete_page(&note)),
        Err(NoteError::NotFound) => not_found(),
        Err(e) => {
            tracing::error!("failed to load note {id}: {e}");
            server_error()
        }
    }
}

/// POST /note/{id}/delete/ — hard delete, then back to the list.
#[debug_handler]
pub async fn note_delete(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
) -> Response {
    match service.delete_note(id).await {
        Ok(()) => redirect_with_flash("/", "note-deleted"),
        Err(NoteError::NotFound) => not_found(),
        Err(e) => {
            tracing::error!("failed to delete note {id}: {e}");
            server_error()
        }
    }
}
