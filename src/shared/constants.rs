/// Maximum upload size in bytes (25MB)
pub const MAX_UPLOAD_SIZE: usize = 25 * 1024 * 1024;

/// Extra allowance on top of MAX_UPLOAD_SIZE for multipart framing overhead
pub const MULTIPART_OVERHEAD: usize = 1024 * 1024;

/// Public URL prefix under which stored binaries are served
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Maximum number of document pages rendered before the preview gate
pub const PREVIEW_PAGE_LIMIT: u32 = 2;
