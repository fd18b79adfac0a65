//! Axum route handler for résumé role prediction.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::prediction::extract::extract_non_empty;
use crate::prediction::service::{predict, Prediction};
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const PDF_CONTENT_TYPE: &str = "application/pdf";

struct Upload {
    content_type: Option<String>,
    bytes: Bytes,
}

fn file_too_large(max_upload_bytes: usize) -> AppError {
    AppError::Validation(format!(
        "File size too large. Please upload a file smaller than {}MB",
        max_upload_bytes / (1024 * 1024)
    ))
}

/// Body-limit rejections surface as multipart errors; report them as the size check would.
fn multipart_error(e: MultipartError, context: &str, max_upload_bytes: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return file_too_large(max_upload_bytes);
    }
    AppError::Validation(format!("{context}: {e}"))
}

async fn read_resume_field(
    multipart: &mut Multipart,
    max_upload_bytes: usize,
) -> Result<Option<Upload>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, "Invalid multipart body", max_upload_bytes))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, "Failed to read uploaded file", max_upload_bytes))?;
        return Ok(Some(Upload {
            content_type,
            bytes,
        }));
    }
    Ok(None)
}

/// POST /api/predict
///
/// Accepts a PDF résumé as the multipart field `resume`, extracts its text and returns
/// the ranked role matches plus the keyword set for a broadened job search.
pub async fn handle_predict(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Prediction>, AppError> {
    let max_upload_bytes = state.config.max_upload_bytes;
    let upload = read_resume_field(&mut multipart, max_upload_bytes)
        .await?
        .ok_or_else(|| AppError::Validation("No resume file uploaded".to_string()))?;

    if upload.content_type.as_deref() != Some(PDF_CONTENT_TYPE) {
        return Err(AppError::Validation("Please upload a PDF file".to_string()));
    }
    if upload.bytes.len() > max_upload_bytes {
        return Err(file_too_large(max_upload_bytes));
    }
    if upload.bytes.is_empty() {
        return Err(AppError::Validation("Invalid file content".to_string()));
    }

    // CPU-bound PDF parsing — spawn_blocking to avoid blocking the async executor.
    let extractor = state.text_extractor.clone();
    let bytes = upload.bytes;
    let text = tokio::task::spawn_blocking(move || extract_non_empty(extractor.as_ref(), &bytes))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in text extraction: {e}"))
        })??;

    debug!(
        text_length = text.len(),
        preview = %text.chars().take(500).collect::<String>(),
        "Extracted résumé text"
    );

    let prediction = predict(&text);
    info!(
        primary_role = %prediction.primary_role,
        matches = prediction.all_matches.len(),
        keywords = prediction.keywords.len(),
        "Résumé role prediction"
    );

    Ok(Json(prediction))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::prediction::extract::{ExtractionError, TextExtractor};
    use crate::routes::build_router;

    const BOUNDARY: &str = "jobboard-test-boundary";

    enum StubExtractor {
        Text(&'static str),
        Corrupt,
    }

    impl TextExtractor for StubExtractor {
        fn extract(&self, _bytes: &[u8]) -> Result<String, ExtractionError> {
            match self {
                StubExtractor::Text(t) => Ok(t.to_string()),
                StubExtractor::Corrupt => Err(ExtractionError::Unparseable("bad xref".to_string())),
            }
        }
    }

    fn multipart_request(field: &str, content_type: &str, file: &[u8]) -> Request<Body> {
        let mut body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"resume.pdf\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(file);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::post("/api/predict")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(extractor: StubExtractor, req: Request<Body>) -> (StatusCode, Value) {
        let mut state = AppState::for_tests();
        state.text_extractor = Arc::new(extractor);
        let resp = build_router(state).oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_predict_returns_ranked_roles_and_keywords() {
        let extractor = StubExtractor::Text(
            "Experienced backend developer skilled in node.js and express, with some react experience.",
        );
        let (status, body) = send(
            extractor,
            multipart_request("resume", "application/pdf", b"%PDF-1.4 stub"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["primaryRole"], "Backend Developer");
        assert_eq!(body["success"], true);
        assert_eq!(body["topSuggestions"][0]["score"], 4.0);
        assert_eq!(body["topSuggestions"][1]["role"], "Business Analyst");
        assert_eq!(body["keywords"][0], "ba");
        assert_eq!(body["debug"]["totalMatches"], 2);
    }

    #[tokio::test]
    async fn test_unmatched_text_falls_back() {
        let (status, body) = send(
            StubExtractor::Text("Lorem ipsum dolor sit amet"),
            multipart_request("resume", "application/pdf", b"%PDF-1.4 stub"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["primaryRole"], "Software Engineer");
        assert!(body["keywords"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_resume_field() {
        let (status, body) = send(
            StubExtractor::Text("devops"),
            multipart_request("avatar", "application/pdf", b"%PDF"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "No resume file uploaded");
    }

    #[tokio::test]
    async fn test_non_pdf_rejected() {
        let (status, body) = send(
            StubExtractor::Text("devops"),
            multipart_request("resume", "text/plain", b"devops engineer"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Please upload a PDF file");
    }

    #[tokio::test]
    async fn test_oversized_upload_rejected() {
        let file = vec![b'x'; AppState::for_tests().config.max_upload_bytes + 1];
        let (status, body) = send(
            StubExtractor::Text("devops"),
            multipart_request("resume", "application/pdf", &file),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("File size too large"));
    }

    #[tokio::test]
    async fn test_upload_past_body_limit_gets_size_message() {
        // Well past the route's body limit, so the multipart reader itself gives up.
        let file = vec![b'x'; AppState::for_tests().config.max_upload_bytes + 128 * 1024];
        let (status, body) = send(
            StubExtractor::Text("devops"),
            multipart_request("resume", "application/pdf", &file),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("File size too large"));
    }

    #[tokio::test]
    async fn test_empty_file_rejected() {
        let (status, body) = send(
            StubExtractor::Text("devops"),
            multipart_request("resume", "application/pdf", b""),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Invalid file content");
    }

    #[tokio::test]
    async fn test_corrupt_pdf_is_extraction_failure() {
        let (status, body) = send(
            StubExtractor::Corrupt,
            multipart_request("resume", "application/pdf", b"%PDF-garbage"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "TEXT_EXTRACTION_FAILED");
    }

    #[tokio::test]
    async fn test_blank_text_is_no_extractable_text() {
        let (status, body) = send(
            StubExtractor::Text(" \n "),
            multipart_request("resume", "application/pdf", b"%PDF-scan"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "NO_EXTRACTABLE_TEXT");
    }
}
