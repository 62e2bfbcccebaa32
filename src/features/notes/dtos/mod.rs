mod note_dto;

pub use note_dto::{
    filter_by_course, search_by_subject, NoteResponseDto, UpdateNoteDto, UploadNoteDto,
    ViewResponseDto,
};
