pub mod gemini_service;
pub mod normalizer;
pub mod pdf_service;
pub mod quiz_service;
