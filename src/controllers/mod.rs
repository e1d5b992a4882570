pub mod health;
pub mod history;
pub mod tts;

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, StatusCode},
};

use crate::domain::audio::{SharedAudio, WAV_CONTENT_TYPE};
use crate::error::{AppError, AppResult};

/// Build a `audio/wav` response for a stored resource
pub(crate) fn audio_response(audio: SharedAudio) -> AppResult<(StatusCode, HeaderMap, Body)> {
    let duration = HeaderValue::from_str(&format!("{:.3}", audio.duration_seconds()))
        .map_err(|e| AppError::Internal(e.to_string()))?;
    let resource_id = HeaderValue::from_str(&audio.id().to_string())
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(WAV_CONTENT_TYPE));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(audio.size_bytes()));
    headers.insert("X-Duration-Seconds", duration);
    headers.insert("X-Resource-Id", resource_id);

    Ok((StatusCode::OK, headers, Body::from(audio.bytes().to_vec())))
}
