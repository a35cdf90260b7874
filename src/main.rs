use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizforge_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let frontend_url = config.frontend_url.clone();

    log::info!("AI Quiz Server running on http://{}:{}", host, port);
    log::info!("Frontend URL: {}", frontend_url);
    log::info!(
        "Gemini API: {}",
        if config.api_key_configured() {
            "Configured"
        } else {
            "NOT CONFIGURED"
        }
    );

    let state = AppState::new(config)
        .map_err(|e| std::io::Error::other(format!("failed to initialize: {}", e)))?;

    HttpServer::new(move || {
        let allowed_origins = [
            frontend_url.clone(),
            "http://localhost:5173".to_string(),
            "http://127.0.0.1:5173".to_string(),
        ];

        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _req_head| {
                origin
                    .to_str()
                    .map(|origin| allowed_origins.iter().any(|allowed| allowed == origin))
                    .unwrap_or(false)
            })
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::health_check)
            .service(handlers::generate_pdf_quiz)
            .service(handlers::generate_topic_quiz)
            .service(handlers::generate_image_quiz)
    })
    .bind((host, port))?
    .run()
    .await
}
