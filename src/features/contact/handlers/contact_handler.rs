use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::contact::dtos::CreateContactDto;
use crate::features::contact::services::ContactService;
use crate::shared::types::OkResponse;

/// Submit a contact-form message
///
/// The submission is stored and then relayed by email; relay failure does
/// not affect the response.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = CreateContactDto,
    responses(
        (status = 200, description = "Submission stored", body = OkResponse),
        (status = 400, description = "Missing name, email, or message")
    )
)]
pub async fn submit_contact(
    State(service): State<Arc<ContactService>>,
    AppJson(dto): AppJson<CreateContactDto>,
) -> Result<Json<OkResponse>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.submit(dto).await?;
    Ok(Json(OkResponse::ok()))
}
