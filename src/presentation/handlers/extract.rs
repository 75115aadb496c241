use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::ExtractionError;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ExtractResponse {
    pub text: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Strips any path components from a client-supplied filename while keeping
/// the extension intact for classification.
fn sanitize_filename(raw: &str) -> String {
    let name = raw.rsplit(['/', '\\']).next().unwrap_or(raw).trim();
    if name.is_empty() {
        "upload".to_string()
    } else {
        name.to_string()
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn extract_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    // Only the `file` field carries the upload; other fields are ignored.
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.name() == Some("file") => break f,
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Extract request with no file");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "No file uploaded".to_string(),
                    }),
                )
                    .into_response();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        }
    };

    let filename = sanitize_filename(field.file_name().unwrap_or("upload"));

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    let max_bytes = state.settings.extraction.max_file_size_mb * 1024 * 1024;
    if data.len() > max_bytes {
        tracing::warn!(bytes = data.len(), max_bytes, "File exceeds size limit");
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(ErrorResponse {
                error: format!(
                    "File exceeds maximum size of {} MB",
                    state.settings.extraction.max_file_size_mb
                ),
            }),
        )
            .into_response();
    }

    tracing::debug!(filename = %filename, bytes = data.len(), "Processing file upload");

    // The temp directory and the file inside it are removed when the guard
    // drops, on every exit path.
    let temp_dir = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create temp directory");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to stage uploaded file".to_string(),
                }),
            )
                .into_response();
        }
    };

    let temp_path = temp_dir.path().join(&filename);
    if let Err(e) = tokio::fs::write(&temp_path, &data).await {
        tracing::error!(error = %e, "Failed to write temp file");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to stage uploaded file".to_string(),
            }),
        )
            .into_response();
    }

    match state.extraction_service.extract_file(&temp_path).await {
        Ok(text) => {
            tracing::info!(filename = %filename, chars = text.len(), "Extraction complete");
            (StatusCode::OK, Json(ExtractResponse { text })).into_response()
        }
        Err(ExtractionError::UnsupportedFormat(format)) => {
            tracing::warn!(format = %format, "Unsupported file format");
            (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(ErrorResponse {
                    error: format!("Unsupported file format: {}", format),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Extraction failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
