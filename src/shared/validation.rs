use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating stored binary filenames before touching the disk.
    /// Generated names are a UUID v4 (hyphenated hex) plus an optional
    /// alphanumeric extension, so anything else is rejected up front.
    /// - Valid: "3fa85f64-5717-4562-b3fc-2c963f66afa6.pdf", "3fa85f64-5717-4562-b3fc-2c963f66afa6"
    /// - Invalid: "../etc/passwd", "notes/../x.pdf", "", "a b.pdf"
    pub static ref STORED_NAME_REGEX: Regex =
        Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}(?:\.[A-Za-z0-9]{1,16})?$").unwrap();
}
