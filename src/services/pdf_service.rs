use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{AppError, AppResult};

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static PAGE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Page \d+ of \d+").expect("page number pattern is valid"));

/// Pull the text layer out of a PDF and clean it up for prompting: collapse
/// whitespace runs (including newlines) into single spaces and drop
/// "Page N of M" artifacts left behind by headers and footers.
pub fn extract_text(pdf_bytes: &[u8]) -> AppResult<String> {
    let raw = pdf_extract::extract_text_from_mem(pdf_bytes)
        .map_err(|e| AppError::Extraction(format!("Failed to extract text from PDF: {}", e)))?;

    let collapsed = WHITESPACE_RE.replace_all(&raw, " ");
    let cleaned = PAGE_NUMBER_RE.replace_all(&collapsed, "");

    Ok(cleaned.trim().to_string())
}

/// Gate before the Gemini call: at least 100 characters and 20 words,
/// otherwise the upload is rejected without spending an API request.
pub fn is_content_sufficient(text: &str) -> bool {
    const MIN_LENGTH: usize = 100;
    const MIN_WORD_COUNT: usize = 20;

    text.len() >= MIN_LENGTH && text.split_whitespace().count() >= MIN_WORD_COUNT
}
