pub mod note_handler;

pub use note_handler::{
    __path_add_view, __path_delete_note, __path_get_note, __path_list_notes, __path_update_note,
    __path_upload_note, add_view, delete_note, get_note, list_notes, update_note, upload_note,
};
