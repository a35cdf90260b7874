use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        gemini_service::{GeminiClient, TextGenerator},
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub model_client: Arc<dyn TextGenerator>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let model_client: Arc<dyn TextGenerator> = Arc::new(GeminiClient::new(&config)?);
        Ok(Self::with_model(config, model_client))
    }

    /// Build state around an injected model client; used by tests to run the
    /// full pipeline without a live credential.
    pub fn with_model(config: Config, model_client: Arc<dyn TextGenerator>) -> Self {
        let quiz_service = Arc::new(QuizService::new(model_client.clone()));

        Self {
            quiz_service,
            model_client,
            config: Arc::new(config),
        }
    }
}
