pub mod contact_handler;

pub use contact_handler::{__path_submit_contact, submit_contact};
