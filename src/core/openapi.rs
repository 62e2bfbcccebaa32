use utoipa::{Modify, OpenApi};

use crate::features::contact::{dtos as contact_dtos, handlers as contact_handlers};
use crate::features::notes::{dtos as notes_dtos, handlers as notes_handlers, models as notes_models};
use crate::features::preview::{dtos as preview_dtos, handlers as preview_handlers};
use crate::shared::types::{ErrorBody, OkResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Notes
        notes_handlers::list_notes,
        notes_handlers::get_note,
        notes_handlers::upload_note,
        notes_handlers::update_note,
        notes_handlers::delete_note,
        notes_handlers::add_view,
        // Preview
        preview_handlers::get_preview_plan,
        preview_handlers::unlock_preview,
        // Contact
        contact_handlers::submit_contact,
    ),
    components(
        schemas(
            // Shared
            OkResponse,
            ErrorBody,
            // Notes
            notes_models::Note,
            notes_dtos::UploadNoteDto,
            notes_dtos::UpdateNoteDto,
            notes_dtos::NoteResponseDto,
            notes_dtos::ViewResponseDto,
            // Preview
            preview_dtos::PreviewPlanDto,
            preview_dtos::UnlockResponseDto,
            // Contact
            contact_dtos::CreateContactDto,
        )
    ),
    tags(
        (name = "notes", description = "Note upload, listing, and management"),
        (name = "preview", description = "Gated document preview"),
        (name = "contact", description = "Contact form submissions (public)"),
    ),
    info(
        title = "StudyShare API",
        version = "0.1.0",
        description = "API documentation for StudyShare",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
