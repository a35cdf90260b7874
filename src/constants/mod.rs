pub mod prompts;

pub const DEFAULT_DIFFICULTY: &str = "Medium";
pub const DEFAULT_QUESTION_COUNT: u32 = 10;

/// Upload cap shared by the PDF and image routes.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub const PDF_MIME_TYPES: &[&str] = &["application/pdf"];
pub const IMAGE_MIME_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/webp"];
