pub mod contact;
pub mod notes;
pub mod preview;
