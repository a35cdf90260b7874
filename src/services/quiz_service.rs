use std::sync::Arc;

use crate::{
    constants::prompts::{
        build_image_prompt, build_text_prompt, build_topic_prompt, DESCRIBE_IMAGE_PROMPT,
    },
    errors::AppResult,
    models::domain::Quiz,
    services::{gemini_service::TextGenerator, normalizer},
};

/// Orchestrates the prompt → model → normalize pipeline for the three
/// generation modes. The modes differ only in how the prompt is built and
/// which fallback topic the normalizer substitutes.
pub struct QuizService {
    model: Arc<dyn TextGenerator>,
}

impl QuizService {
    pub fn new(model: Arc<dyn TextGenerator>) -> Self {
        Self { model }
    }

    pub async fn generate_from_text(
        &self,
        content: &str,
        difficulty: &str,
        question_count: u32,
    ) -> AppResult<Quiz> {
        let prompt = build_text_prompt(content, difficulty, question_count);
        let raw = self.model.generate_text(&prompt).await?;
        normalizer::normalize(&raw, difficulty, "General")
    }

    pub async fn generate_from_topic(
        &self,
        topic: &str,
        difficulty: &str,
        question_count: u32,
    ) -> AppResult<Quiz> {
        let prompt = build_topic_prompt(topic, difficulty, question_count);
        let raw = self.model.generate_text(&prompt).await?;
        normalizer::normalize(&raw, difficulty, topic)
    }

    /// Two strictly ordered model calls: describe the image, then build a
    /// quiz from the description. The image bytes are sent exactly once.
    pub async fn generate_from_image(
        &self,
        image_bytes: &[u8],
        mime_type: &str,
        difficulty: &str,
        question_count: u32,
    ) -> AppResult<Quiz> {
        let description = self
            .model
            .generate_text_with_image(DESCRIBE_IMAGE_PROMPT, image_bytes, mime_type)
            .await?;

        let prompt = build_image_prompt(&description, difficulty, question_count);
        let raw = self.model.generate_text(&prompt).await?;
        normalizer::normalize(&raw, difficulty, "Visual Analysis")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::services::gemini_service::MockTextGenerator;

    const REPLY: &str = r#"{"questions":[{"question": "q", "options": ["a","b","c","d"]}]}"#;

    #[actix_web::test]
    async fn text_mode_uses_general_fallback_topic() {
        let mut model = MockTextGenerator::new();
        model
            .expect_generate_text()
            .times(1)
            .returning(|_| Ok(REPLY.to_string()));

        let service = QuizService::new(Arc::new(model));
        let quiz = service
            .generate_from_text("some study material", "Medium", 5)
            .await
            .expect("should generate");

        assert_eq!(quiz.questions[0].topic, "General");
        assert_eq!(quiz.questions[0].difficulty, "Medium");
    }

    #[actix_web::test]
    async fn topic_mode_falls_back_to_the_literal_topic() {
        let mut model = MockTextGenerator::new();
        model
            .expect_generate_text()
            .withf(|prompt| prompt.contains("Ancient Rome"))
            .times(1)
            .returning(|_| Ok(REPLY.to_string()));

        let service = QuizService::new(Arc::new(model));
        let quiz = service
            .generate_from_topic("Ancient Rome", "Hard", 3)
            .await
            .expect("should generate");

        assert_eq!(quiz.questions[0].topic, "Ancient Rome");
        assert_eq!(quiz.questions[0].difficulty, "Hard");
    }

    #[actix_web::test]
    async fn image_mode_describes_then_generates() {
        let mut model = MockTextGenerator::new();
        model
            .expect_generate_text_with_image()
            .times(1)
            .returning(|_, _, _| Ok("a diagram of the water cycle".to_string()));
        model
            .expect_generate_text()
            .withf(|prompt| prompt.contains("a diagram of the water cycle"))
            .times(1)
            .returning(|_| Ok(REPLY.to_string()));

        let service = QuizService::new(Arc::new(model));
        let quiz = service
            .generate_from_image(&[0xFF, 0xD8], "image/jpeg", "Medium", 5)
            .await
            .expect("should generate");

        assert_eq!(quiz.questions[0].topic, "Visual Analysis");
    }

    #[actix_web::test]
    async fn model_failure_aborts_image_pipeline_before_second_call() {
        let mut model = MockTextGenerator::new();
        model
            .expect_generate_text_with_image()
            .times(1)
            .returning(|_, _, _| Err(AppError::ModelUnavailable("quota exceeded".to_string())));
        model.expect_generate_text().times(0);

        let service = QuizService::new(Arc::new(model));
        let err = service
            .generate_from_image(&[0xFF, 0xD8], "image/jpeg", "Medium", 5)
            .await
            .expect_err("should fail");

        assert!(matches!(err, AppError::ModelUnavailable(_)));
    }
}
