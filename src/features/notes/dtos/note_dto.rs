use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::notes::models::Note;

/// Upload request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadNoteDto {
    /// The document to upload
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    /// Title of the note (required)
    #[schema(example = "Calc Notes")]
    pub title: String,
    /// Course the note belongs to (required)
    #[schema(example = "BTech")]
    pub course: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Optional subject tag
    #[schema(example = "Mathematics")]
    pub subject: Option<String>,
    /// Uploader email; acts as the attribution proof from the delegated
    /// identity provider (required)
    #[schema(example = "a@x.com")]
    pub owner_email: String,
    /// Uploader display name
    pub owner_name: Option<String>,
}

/// PATCH body for a note. Only `title` and `description` are mutable;
/// any other field sent by the client is ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateNoteDto {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Response for upload and update operations: `{ "ok": true, "note": {...} }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NoteResponseDto {
    pub ok: bool,
    pub note: Note,
}

impl NoteResponseDto {
    pub fn new(note: Note) -> Self {
        Self { ok: true, note }
    }
}

/// Response for the view-increment operation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ViewResponseDto {
    pub ok: bool,
    pub views: u64,
}

// Pure filter helpers over a listed collection. Kept out of the store
// contract: the store only guarantees a total, stably-ordered list, and
// callers compose these as needed.

/// Notes belonging to a course (exact match)
#[allow(dead_code)]
pub fn filter_by_course<'a>(notes: &'a [Note], course: &str) -> Vec<&'a Note> {
    notes
        .iter()
        .filter(|n| n.course.as_deref() == Some(course))
        .collect()
}

/// Notes whose subject contains the query, case-insensitive
#[allow(dead_code)]
pub fn search_by_subject<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    let query = query.to_lowercase();
    notes
        .iter()
        .filter(|n| {
            n.subject
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(&query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, course: Option<&str>, subject: Option<&str>) -> Note {
        Note {
            id: id.to_string(),
            title: id.to_string(),
            description: None,
            filename: format!("{}.pdf", id),
            original_name: "n.pdf".to_string(),
            size: 1,
            mime_type: "application/pdf".to_string(),
            url: format!("/uploads/{}.pdf", id),
            uploaded_at: "2024-01-01T00:00:00.000Z".to_string(),
            owner_email: None,
            owner_name: None,
            subject: subject.map(String::from),
            course: course.map(String::from),
            views: 0,
        }
    }

    #[test]
    fn test_filter_by_course_exact_match() {
        let notes = vec![
            note("a", Some("BTech"), None),
            note("b", Some("BSc"), None),
            note("c", None, None),
        ];
        let hits = filter_by_course(&notes, "BTech");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "a");
        assert!(filter_by_course(&notes, "btech").is_empty());
    }

    #[test]
    fn test_search_by_subject_substring_case_insensitive() {
        let notes = vec![
            note("a", None, Some("Mathematics")),
            note("b", None, Some("Applied MATH")),
            note("c", None, Some("Physics")),
            note("d", None, None),
        ];
        let hits = search_by_subject(&notes, "math");
        let ids: Vec<_> = hits.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }
}
