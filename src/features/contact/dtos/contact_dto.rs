use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Contact form body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateContactDto {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(email(message = "email must be a valid address"))]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    pub subject: Option<String>,
    pub category: Option<String>,

    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}
