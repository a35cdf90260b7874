use serde::{Deserialize, Serialize};

/// A single validated multiple-choice question. Every field is guaranteed
/// present after normalization; `image_url` serializes as `null` when no
/// illustration could be derived, never as an empty string.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: u32,
    pub explanation: String,
    pub difficulty: String,
    pub topic: String,
    pub image_url: Option<String>,
}

/// Ordered sequence of validated questions returned to the caller.
/// Invariant: non-empty once normalization succeeds.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
}
