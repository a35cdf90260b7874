use actix_multipart::{Field, Multipart};
use actix_web::{post, web, HttpResponse};
use futures::TryStreamExt;
use validator::Validate;

use crate::{
    app_state::AppState,
    constants::{IMAGE_MIME_TYPES, MAX_UPLOAD_BYTES, PDF_MIME_TYPES},
    errors::{AppError, AppResult},
    models::dto::{
        request::{QuizParams, TopicQuizRequest},
        response::{QuizMetadata, QuizResponse},
    },
    services::pdf_service,
};

pub(crate) struct UploadedFile {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

async fn read_field_bytes(field: &mut Field) -> AppResult<Vec<u8>> {
    let mut data = Vec::new();

    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {}", e)))?
    {
        if data.len() + chunk.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::Validation(
                "File too large. Maximum file size is 10MB".to_string(),
            ));
        }
        data.extend_from_slice(&chunk);
    }

    Ok(data)
}

async fn read_text_field(field: &mut Field) -> AppResult<String> {
    let data = read_field_bytes(field).await?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// Drain a multipart upload into memory, enforcing the MIME allow-list and
/// the size cap while the stream is read. A disallowed file never reaches
/// extraction or the model API.
async fn read_upload(
    payload: &mut Multipart,
    allowed_mimes: &[&str],
) -> AppResult<(Option<UploadedFile>, QuizParams)> {
    let mut file = None;
    let mut params = QuizParams::default();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {}", e)))?
    {
        match field.name().unwrap_or_default() {
            "file" => {
                let mime_type = field
                    .content_type()
                    .map(|mime| mime.essence_str().to_string())
                    .unwrap_or_default();

                if !allowed_mimes.contains(&mime_type.as_str()) {
                    return Err(AppError::Validation(
                        "Invalid file type. Only PDF, JPG, PNG, and WebP are allowed.".to_string(),
                    ));
                }

                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .unwrap_or("upload")
                    .to_string();

                let bytes = read_field_bytes(&mut field).await?;

                file = Some(UploadedFile {
                    filename,
                    mime_type,
                    bytes,
                });
            }
            "difficulty" => {
                let value = read_text_field(&mut field).await?;
                if !value.trim().is_empty() {
                    params.difficulty = value;
                }
            }
            "questionCount" => {
                let value = read_text_field(&mut field).await?;
                if let Ok(count) = value.trim().parse() {
                    params.question_count = count;
                }
            }
            // Unknown fields are drained and ignored by the next try_next.
            _ => {}
        }
    }

    Ok((file, params))
}

#[post("/api/upload/pdf")]
pub async fn generate_pdf_quiz(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let (file, params) = read_upload(&mut payload, PDF_MIME_TYPES).await?;
    let file = file.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    log::info!("Extracting text from PDF...");
    let bytes = file.bytes;
    let text = web::block(move || pdf_service::extract_text(&bytes))
        .await
        .map_err(|e| AppError::Internal(format!("Extraction task failed: {}", e)))??;

    if !pdf_service::is_content_sufficient(&text) {
        return Err(AppError::Extraction(
            "PDF content is too short or invalid. Please upload a PDF with more text content."
                .to_string(),
        ));
    }

    log::info!("Extracted {} characters from PDF", text.len());
    log::info!("Generating quiz with Gemini API...");

    let quiz = state
        .quiz_service
        .generate_from_text(&text, &params.difficulty, params.question_count)
        .await?;

    log::info!("Generated {} questions", quiz.questions.len());

    let metadata = QuizMetadata::pdf(file.filename, params.difficulty, quiz.questions.len());
    Ok(HttpResponse::Ok().json(QuizResponse::new(quiz, metadata)))
}

#[post("/api/generate/topic")]
pub async fn generate_topic_quiz(
    state: web::Data<AppState>,
    request: web::Json<TopicQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();

    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("Topic is required".to_string()));
    }
    request.validate()?;

    log::info!("Generating quiz for topic: \"{}\"...", request.topic);

    let quiz = state
        .quiz_service
        .generate_from_topic(&request.topic, request.difficulty(), request.question_count())
        .await?;

    log::info!(
        "Generated {} questions for topic \"{}\"",
        quiz.questions.len(),
        request.topic
    );

    let metadata = QuizMetadata::topic(
        request.topic.clone(),
        request.difficulty().to_string(),
        quiz.questions.len(),
    );
    Ok(HttpResponse::Ok().json(QuizResponse::new(quiz, metadata)))
}

#[post("/api/upload/image")]
pub async fn generate_image_quiz(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let (file, params) = read_upload(&mut payload, IMAGE_MIME_TYPES).await?;
    let file = file.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    log::info!(
        "Processing image: {} bytes, type {}",
        file.bytes.len(),
        file.mime_type
    );
    log::info!("Generating quiz from image with Gemini API...");

    let quiz = state
        .quiz_service
        .generate_from_image(
            &file.bytes,
            &file.mime_type,
            &params.difficulty,
            params.question_count,
        )
        .await?;

    log::info!("Generated {} questions from image", quiz.questions.len());

    let metadata = QuizMetadata::image(file.filename, params.difficulty, quiz.questions.len());
    Ok(HttpResponse::Ok().json(QuizResponse::new(quiz, metadata)))
}
