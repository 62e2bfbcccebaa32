use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Persisted metadata describing one uploaded document.
///
/// Wire and on-disk representation are the same camelCase JSON object.
/// `id` is the stem of the generated stored filename, tying the record and
/// its binary payload together 1:1. `uploaded_at` is an RFC-3339 string;
/// for that format lexicographic order is chronological order, which the
/// store relies on when sorting.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Storage-relative name of the binary payload
    pub filename: String,
    /// User-supplied filename, display only
    pub original_name: String,
    /// Byte count, set at creation
    pub size: u64,
    pub mime_type: String,
    /// Relative path into the static uploads root
    pub url: String,
    pub uploaded_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    /// View counter; records written before the counter existed deserialize
    /// as 0 without the backfill being persisted
    #[serde(default)]
    pub views: u64,
}
