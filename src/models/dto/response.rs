use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::Quiz;

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub quiz: Quiz,
    pub metadata: QuizMetadata,
}

impl QuizResponse {
    pub fn new(quiz: Quiz, metadata: QuizMetadata) -> Self {
        Self {
            success: true,
            quiz,
            metadata,
        }
    }
}

/// Request provenance echoed back with every quiz. `question_count` is the
/// normalized sequence length, which may differ from the requested count.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizMetadata {
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub difficulty: String,
    pub question_count: usize,
}

impl QuizMetadata {
    pub fn pdf(filename: String, difficulty: String, question_count: usize) -> Self {
        Self {
            source: "pdf",
            filename: Some(filename),
            topic: None,
            generated_at: Utc::now(),
            difficulty,
            question_count,
        }
    }

    pub fn topic(topic: String, difficulty: String, question_count: usize) -> Self {
        Self {
            source: "topic",
            filename: None,
            topic: Some(topic),
            generated_at: Utc::now(),
            difficulty,
            question_count,
        }
    }

    pub fn image(filename: String, difficulty: String, question_count: usize) -> Self {
        Self {
            source: "image",
            filename: Some(filename),
            topic: None,
            generated_at: Utc::now(),
            difficulty,
            question_count,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub gemini_api: &'static str,
    pub gemini_message: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_omits_unused_provenance_fields() {
        let metadata = QuizMetadata::topic("Jazz".to_string(), "Medium".to_string(), 3);
        let json = serde_json::to_value(&metadata).expect("metadata should serialize");

        assert_eq!(json["source"], "topic");
        assert_eq!(json["topic"], "Jazz");
        assert_eq!(json["questionCount"], 3);
        assert!(json.get("filename").is_none());
        assert!(json.get("generatedAt").is_some());
    }

    #[test]
    fn quiz_response_marks_success() {
        let quiz = Quiz { questions: vec![] };
        let metadata = QuizMetadata::pdf("notes.pdf".to_string(), "Hard".to_string(), 0);
        let response = QuizResponse::new(quiz, metadata);

        let json = serde_json::to_value(&response).expect("response should serialize");
        assert_eq!(json["success"], true);
        assert_eq!(json["metadata"]["filename"], "notes.pdf");
    }

    #[test]
    fn health_response_uses_camel_case_keys() {
        let response = HealthResponse {
            status: "ok",
            gemini_api: "connected",
            gemini_message: "connected".to_string(),
            timestamp: Utc::now(),
        };

        let json = serde_json::to_value(&response).expect("response should serialize");
        assert_eq!(json["geminiApi"], "connected");
        assert!(json.get("gemini_api").is_none());
    }
}
