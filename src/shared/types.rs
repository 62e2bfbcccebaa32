use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every non-success status: `{ "ok": false, "error": "..." }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub ok: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: String) -> Self {
        Self { ok: false, error }
    }
}

/// Minimal success acknowledgment: `{ "ok": true }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
