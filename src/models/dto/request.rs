use serde::Deserialize;
use validator::Validate;

use crate::constants::{DEFAULT_DIFFICULTY, DEFAULT_QUESTION_COUNT};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TopicQuizRequest {
    #[validate(length(min = 1, message = "Topic is required"))]
    pub topic: String,

    pub difficulty: Option<String>,

    pub question_count: Option<u32>,
}

impl TopicQuizRequest {
    pub fn difficulty(&self) -> &str {
        self.difficulty.as_deref().unwrap_or(DEFAULT_DIFFICULTY)
    }

    pub fn question_count(&self) -> u32 {
        self.question_count.unwrap_or(DEFAULT_QUESTION_COUNT)
    }
}

/// Difficulty and question count carried alongside a multipart upload.
/// Unparsable or missing form fields fall back to the defaults, matching
/// the leniency of the JSON route.
#[derive(Debug, Clone)]
pub struct QuizParams {
    pub difficulty: String,
    pub question_count: u32,
}

impl Default for QuizParams {
    fn default() -> Self {
        Self {
            difficulty: DEFAULT_DIFFICULTY.to_string(),
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }
}
