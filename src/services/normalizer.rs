//! Turns an untrusted model reply into a guaranteed-shape [`Quiz`].
//!
//! The contract is deliberately asymmetric: strict at the envelope (the reply
//! must parse as JSON and carry a `questions` array) and lenient per item
//! (missing or malformed question fields are repaired with defaults, never
//! rejected). This keeps the gateway usable against an occasionally sloppy
//! generative upstream while still catching catastrophic format drift.

use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Question, Quiz},
};

const IMAGE_API_BASE: &str = "https://image.pollinations.ai";

/// Remove markdown code-fence lines the model sometimes wraps its JSON in,
/// in either the opening or closing position, with or without a `json`
/// language tag or trailing newline. Pure text transform; a no-op on
/// fence-free input.
pub fn strip_code_fences(raw: &str) -> String {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        text = rest.strip_prefix('\n').unwrap_or(rest);
    }

    if let Some(rest) = text.strip_suffix("```") {
        text = rest.strip_suffix('\n').unwrap_or(rest);
    }

    text.trim().to_string()
}

/// Parse and repair a raw model reply.
///
/// Hard failures: unparsable JSON, a missing or non-array `questions` key,
/// or an empty question list. Everything below the envelope is repaired
/// field by field with the supplied fallbacks.
pub fn normalize(raw: &str, fallback_difficulty: &str, fallback_topic: &str) -> AppResult<Quiz> {
    let cleaned = strip_code_fences(raw);

    let value: Value = serde_json::from_str(&cleaned).map_err(|e| {
        log::debug!("unparsable model reply: {}", raw);
        AppError::MalformedReply(format!("model reply is not valid JSON: {}", e))
    })?;

    let items = value
        .get("questions")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            AppError::MalformedReply("invalid quiz structure: missing questions array".to_string())
        })?;

    if items.is_empty() {
        return Err(AppError::MalformedReply(
            "model returned an empty questions array".to_string(),
        ));
    }

    let questions = items
        .iter()
        .enumerate()
        .map(|(index, item)| repair_question(item, index, fallback_difficulty, fallback_topic))
        .collect();

    Ok(Quiz { questions })
}

/// Field-by-field repair of one question. Note the two defaulting rules:
/// `id` is replaced whenever the provided value is absent, zero, or out of
/// range (so ids always match the 1-based output position when dropped),
/// while `correctAnswer` defaults only when absent or null, so an explicit
/// 0 survives. String fields fall back when empty as well as when missing.
fn repair_question(item: &Value, index: usize, fallback_difficulty: &str, fallback_topic: &str) -> Question {
    let id = item
        .get("id")
        .and_then(Value::as_u64)
        .and_then(|id| u32::try_from(id).ok())
        .filter(|&id| id != 0)
        .unwrap_or((index + 1) as u32);

    let question = string_field(item, "question").unwrap_or_default();

    let options: Vec<String> = item
        .get("options")
        .and_then(Value::as_array)
        .map(|opts| {
            opts.iter()
                .map(|opt| match opt.as_str() {
                    Some(s) => s.to_string(),
                    None => opt.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    if options.len() != 4 {
        log::warn!(
            "question {} has {} options instead of 4; passing through",
            id,
            options.len()
        );
    }

    let correct_answer = match item.get("correctAnswer") {
        Some(v) if !v.is_null() => v.as_u64().unwrap_or(0) as u32,
        _ => 0,
    };

    let image_url = string_field(item, "imageUrl")
        .filter(|url| !url.is_empty())
        .or_else(|| {
            string_field(item, "visual_keyword")
                .filter(|keyword| !keyword.is_empty())
                .map(|keyword| derive_image_url(&keyword))
        });

    Question {
        id,
        question,
        options,
        correct_answer,
        explanation: string_field(item, "explanation").unwrap_or_default(),
        difficulty: string_field(item, "difficulty")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| fallback_difficulty.to_string()),
        topic: string_field(item, "topic")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| fallback_topic.to_string()),
        image_url,
    }
}

fn string_field(item: &Value, key: &str) -> Option<String> {
    item.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Derive an illustrative image URL from the model's visual keyword.
fn derive_image_url(keyword: &str) -> String {
    format!(
        "{}/prompt/{}?width=800&height=600&nologo=true",
        IMAGE_API_BASE,
        urlencoding::encode(keyword)
    )
}
