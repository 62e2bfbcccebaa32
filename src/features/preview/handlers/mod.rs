pub mod preview_handler;

pub use preview_handler::{
    __path_get_preview_plan, __path_unlock_preview, get_preview_plan, unlock_preview,
};
