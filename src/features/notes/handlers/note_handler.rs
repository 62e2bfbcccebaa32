use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::notes::dtos::{NoteResponseDto, UpdateNoteDto, ViewResponseDto};
use crate::features::notes::models::Note;
use crate::features::notes::services::{NoteService, NoteUpload, UploadedFile};
use crate::shared::types::OkResponse;

/// List all notes, newest first
#[utoipa::path(
    get,
    path = "/api/notes",
    tag = "notes",
    responses(
        (status = 200, description = "All notes sorted by upload time descending", body = Vec<Note>)
    )
)]
pub async fn list_notes(State(service): State<Arc<NoteService>>) -> Json<Vec<Note>> {
    Json(service.list().await)
}

/// Fetch a single note
#[utoipa::path(
    get,
    path = "/api/notes/{id}",
    tag = "notes",
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = 200, description = "The note", body = Note),
        (status = 404, description = "Unknown note id")
    )
)]
pub async fn get_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<String>,
) -> Result<Json<Note>> {
    Ok(Json(service.get(&id).await?))
}

/// Upload a note
///
/// Accepts multipart/form-data with:
/// - `file`: The document to upload (required)
/// - `title`, `course`: required text fields
/// - `description`, `subject`, `ownerName`: optional text fields
/// - `ownerEmail`: required; missing yields 401
#[utoipa::path(
    post,
    path = "/api/notes",
    tag = "notes",
    request_body(
        content = crate::features::notes::dtos::UploadNoteDto,
        content_type = "multipart/form-data",
        description = "Note upload form",
    ),
    responses(
        (status = 200, description = "Note uploaded successfully", body = NoteResponseDto),
        (status = 400, description = "Missing file, title, or course"),
        (status = 401, description = "Missing ownerEmail")
    )
)]
pub async fn upload_note(
    State(service): State<Arc<NoteService>>,
    mut multipart: Multipart,
) -> Result<Json<NoteResponseDto>> {
    let mut upload = NoteUpload::default();

    // Process multipart fields; the binary streams to memory here and hits
    // disk in the service before metadata validation, matching the
    // write-then-compensate contract
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let original_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                upload.file = Some(UploadedFile {
                    data: data.to_vec(),
                    original_name,
                    content_type,
                });
            }
            "title" => upload.title = Some(read_text(field, "title").await?),
            "description" => upload.description = Some(read_text(field, "description").await?),
            "subject" => upload.subject = Some(read_text(field, "subject").await?),
            "course" => upload.course = Some(read_text(field, "course").await?),
            "ownerEmail" => upload.owner_email = Some(read_text(field, "ownerEmail").await?),
            "ownerName" => upload.owner_name = Some(read_text(field, "ownerName").await?),
            _ => {
                // Ignore unknown fields
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let note = service.submit(upload).await?;
    Ok(Json(NoteResponseDto::new(note)))
}

/// Update a note's title and/or description
#[utoipa::path(
    patch,
    path = "/api/notes/{id}",
    tag = "notes",
    params(("id" = String, Path, description = "Note id")),
    request_body = UpdateNoteDto,
    responses(
        (status = 200, description = "Updated note", body = NoteResponseDto),
        (status = 404, description = "Unknown note id")
    )
)]
pub async fn update_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateNoteDto>,
) -> Result<Json<NoteResponseDto>> {
    let note = service.update(&id, dto.title, dto.description).await?;
    Ok(Json(NoteResponseDto::new(note)))
}

/// Delete a note and its stored binary
#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    tag = "notes",
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = 200, description = "Note deleted", body = OkResponse),
        (status = 404, description = "Unknown note id")
    )
)]
pub async fn delete_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<String>,
) -> Result<Json<OkResponse>> {
    service.delete(&id).await?;
    Ok(Json(OkResponse::ok()))
}

/// Increment a note's view counter
#[utoipa::path(
    post,
    path = "/api/notes/{id}/view",
    tag = "notes",
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = 200, description = "New view count", body = ViewResponseDto),
        (status = 404, description = "Unknown note id")
    )
)]
pub async fn add_view(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<String>,
) -> Result<Json<ViewResponseDto>> {
    let views = service.increment_view(&id).await?;
    Ok(Json(ViewResponseDto { ok: true, views }))
}

async fn read_text(field: axum::extract::multipart::Field<'_>, name: &str) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read {} field: {}", name, e)))
}
