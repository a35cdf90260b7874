//! Prompt templates sent to the Gemini API.
//!
//! Every builder is a pure function of its inputs: same content, difficulty
//! and question count always render the same literal string. The target JSON
//! schema is restated inline in each prompt because the model reply is parsed
//! against exactly that shape by the normalizer.

/// Source content longer than this is cut off before prompting.
pub const MAX_CONTENT_LENGTH: usize = 4000;

/// First of the two image-mode calls: get a dense textual description that
/// the quiz prompt can work from, so the image itself is sent only once.
pub const DESCRIBE_IMAGE_PROMPT: &str = "Describe this image in detail. Include all visible elements, text, diagrams, concepts, and any educational content present. Be comprehensive and specific.";

pub const HEALTH_CHECK_PROMPT: &str = "Say \"API is working\" if you can read this.";

/// Truncate to `MAX_CONTENT_LENGTH` characters, marking the cut. Operates on
/// characters rather than bytes so multi-byte content never splits mid-glyph.
fn truncate_content(content: &str) -> String {
    let mut chars = content.char_indices();
    match chars.nth(MAX_CONTENT_LENGTH) {
        Some((cut, _)) => format!("{} ...(truncated)", &content[..cut]),
        None => format!("{} ", content),
    }
}

pub fn build_text_prompt(content: &str, difficulty: &str, question_count: u32) -> String {
    format!(
        r#"You are an expert quiz creator. Generate {question_count} multiple-choice quiz questions based on the following content.

Difficulty Level: {difficulty}

Content to analyze:
{content}

IMPORTANT: Return ONLY a valid JSON object. Do not include any markdown formatting, code blocks, or explanatory text.

The JSON must follow this EXACT structure:
{{
  "questions": [
    {{
      "id": 1,
      "question": "Clear, specific question text?",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "correctAnswer": 0,
      "explanation": "Detailed explanation of why this answer is correct",
      "difficulty": "{difficulty}",
      "topic": "Auto-detected topic from content",
      "visual_keyword": "A single descriptive keyword or short phrase for image generation (e.g. 'Solar System', 'Microscope', 'Ancient Rome')"
    }}
  ]
}}

Requirements:
1. Generate exactly {question_count} questions
2. Each question MUST have exactly 4 options
3. correctAnswer is the index (0-3) of the correct option in the options array
4. Make questions directly relevant to the provided content
5. Vary question types (factual, conceptual, analytical)
6. Provide clear, educational explanations
7. Auto-detect the most appropriate topic from the content
8. Ensure questions are appropriate for {difficulty} difficulty level
9. Make sure the JSON is valid and parseable
10. Do not include any text outside the JSON object

Return ONLY the JSON object, nothing else."#,
        content = truncate_content(content),
    )
}

pub fn build_image_prompt(image_description: &str, difficulty: &str, question_count: u32) -> String {
    format!(
        r#"You are an expert quiz creator. Based on this image description, generate {question_count} multiple-choice quiz questions.

Image Description:
{image_description}

Difficulty Level: {difficulty}

IMPORTANT: Return ONLY a valid JSON object. Do not include any markdown formatting, code blocks, or explanatory text.

The JSON must follow this EXACT structure:
{{
  "questions": [
    {{
      "id": 1,
      "question": "Question about the image content?",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "correctAnswer": 0,
      "explanation": "Explanation based on image content",
      "difficulty": "{difficulty}",
      "topic": "Topic derived from image",
      "visual_keyword": "Short visual description related to this specific question"
    }}
  ]
}}

Requirements:
1. Generate exactly {question_count} questions
2. Each question MUST have exactly 4 options
3. correctAnswer is the index (0-3) of the correct option
4. Questions should be about what's visible or inferable from the image
5. Include questions about visual elements, context, and implications
6. Provide educational explanations
7. Ensure questions match {difficulty} difficulty level
8. Return ONLY valid JSON, no additional text

Return ONLY the JSON object, nothing else."#,
    )
}

pub fn build_topic_prompt(topic: &str, difficulty: &str, question_count: u32) -> String {
    format!(
        r#"You are an expert quiz creator. Generate {question_count} multiple-choice quiz questions about "{topic}". Use your internal knowledge to create accurate, engaging, and educational questions.

Difficulty Level: {difficulty}
Topic: {topic}

IMPORTANT: Return ONLY a valid JSON object. Do not include any markdown formatting, code blocks, or explanatory text.

The JSON must follow this EXACT structure:
{{
  "questions": [
    {{
      "id": 1,
      "question": "Clear, specific question text?",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "correctAnswer": 0,
      "explanation": "Detailed explanation of why this answer is correct",
      "difficulty": "{difficulty}",
      "topic": "{topic}",
      "visual_keyword": "A single descriptive keyword or short phrase for image generation (e.g. 'Guitar', 'Beethoven', 'Jazz Club')"
    }}
  ]
}}

Requirements:
1. Generate exactly {question_count} questions
2. Each question MUST have exactly 4 options
3. correctAnswer is the index (0-3) of the correct option
4. Questions should be factually accurate and relevant to "{topic}"
5. Vary question types (factual, conceptual, analytical)
6. Provide clear, educational explanations
7. Ensure questions are appropriate for {difficulty} difficulty level
8. Return ONLY valid JSON, no additional text
9. Do not include any text outside the JSON object

Return ONLY the JSON object, nothing else."#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_are_deterministic() {
        let a = build_topic_prompt("Jazz", "Hard", 5);
        let b = build_topic_prompt("Jazz", "Hard", 5);
        assert_eq!(a, b);
    }

    #[test]
    fn text_prompt_embeds_parameters() {
        let prompt = build_text_prompt("The mitochondria is the powerhouse.", "Easy", 3);

        assert!(prompt.contains("Generate 3 multiple-choice quiz questions"));
        assert!(prompt.contains("Difficulty Level: Easy"));
        assert!(prompt.contains("The mitochondria is the powerhouse."));
        assert!(prompt.contains("visual_keyword"));
    }

    #[test]
    fn short_content_is_not_marked_truncated() {
        let prompt = build_text_prompt("short content", "Medium", 1);
        assert!(!prompt.contains("...(truncated)"));
    }

    #[test]
    fn long_content_is_cut_and_marked() {
        let content = "word ".repeat(2000);
        let prompt = build_text_prompt(&content, "Medium", 1);

        assert!(prompt.contains("...(truncated)"));
        // The embedded content should be capped at the limit plus the marker.
        let embedded_start = prompt.find("word ").expect("content present");
        let marker = prompt.find("...(truncated)").expect("marker present");
        assert!(marker - embedded_start <= MAX_CONTENT_LENGTH + 1);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let content = "é".repeat(MAX_CONTENT_LENGTH + 50);
        let prompt = build_text_prompt(&content, "Medium", 1);
        assert!(prompt.contains("...(truncated)"));
    }

    #[test]
    fn topic_prompt_quotes_the_topic() {
        let prompt = build_topic_prompt("Ancient Rome", "Medium", 10);
        assert!(prompt.contains(r#"about "Ancient Rome""#));
        assert!(prompt.contains(r#""topic": "Ancient Rome""#));
    }
}
