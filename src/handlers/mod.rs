pub mod html;
pub mod rest;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::service::NoteService;

/// Maps every logical operation to its handler. The whole table is
/// resolved once at startup.
pub fn app_router(service: Arc<NoteService>) -> Router {
    let pages = Router::new()
        .route("/", get(html::note_list))
        .route("/note/{id}/", get(html::note_detail))
        .route(
            "/create/",
            get(html::note_create_form).post(html::note_create),
        )
        .route(
            "/note/{id}/edit/",
            get(html::note_update_form).post(html::note_update),
        )
        .route(
            "/note/{id}/delete/",
            get(html::note_delete_confirm).post(html::note_delete),
        )
        .with_state(service.clone());

    // Privileged admin front-end: JSON over the same service operations.
    let admin = Router::new()
        .route("/notes", post(rest::create_note))
        .route("/notes/{id}", put(rest::update_note))
        .route("/notes/{id}", delete(rest::delete_note))
        .route("/notes/{id}", get(rest::get_one_note))
        .route("/notes", get(rest::get_all_notes))
        .merge(
            SwaggerUi::new("/swagger-ui")
                .config(utoipa_swagger_ui::Config::new([
                    "/admin/api-doc/openapi.json",
                ]))
                .url("/api-doc/openapi.json", rest::ApiDoc::openapi()),
        )
        .with_state(service);

    Router::new()
        .merge(pages)
        .nest("/admin", admin)
        .layer(TraceLayer::new_for_http())
}
