use std::env;

use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: SecretString,
    pub gemini_model: String,
    pub frontend_url: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: SecretString::from(
                env::var("GEMINI_API_KEY").unwrap_or_default(),
            ),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash-001".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
        }
    }

    pub fn api_key_configured(&self) -> bool {
        use secrecy::ExposeSecret;

        !self.gemini_api_key.expose_secret().is_empty()
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: SecretString::from("test_api_key".to_string()),
            gemini_model: "gemini-1.5-flash-001".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3001,
        }
    }
}
