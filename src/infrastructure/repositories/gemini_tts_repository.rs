use super::tts_repository::{BackendError, TtsRepository};
use crate::domain::audio::RawAudioBuffer;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_modalities: [&'static str; 1],
    speech_config: SpeechConfig<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig<'a> {
    voice_config: VoiceConfig<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig<'a> {
    prebuilt_voice_config: PrebuiltVoiceConfig<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig<'a> {
    voice_name: &'a str,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CandidatePart {
    inline_data: Option<InlineData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Gemini speech generation implementation of TTS repository
pub struct GeminiTtsRepository {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    voice: String,
}

impl GeminiTtsRepository {
    pub fn new(api_key: String, base_url: String, model: String, voice: String) -> Self {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            voice,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn map_transport_error(&self, err: reqwest::Error) -> BackendError {
        if err.is_timeout() {
            BackendError::Timeout(CONNECT_TIMEOUT)
        } else if err.is_connect() || err.is_request() {
            BackendError::Connectivity(err.to_string())
        } else {
            BackendError::Provider(err.to_string())
        }
    }

    fn map_status(status: StatusCode, body: String) -> BackendError {
        let message = format!("Gemini {}: {}", status, body);
        match status {
            StatusCode::TOO_MANY_REQUESTS => BackendError::Quota(message),
            StatusCode::BAD_REQUEST => BackendError::ContentRejected(message),
            StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => BackendError::Connectivity(message),
            _ => BackendError::Provider(message),
        }
    }

    /// Decode every inline audio part of the first candidate.
    fn extract_audio(response: GeminiResponse) -> Result<RawAudioBuffer, BackendError> {
        if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(BackendError::ContentRejected(format!(
                "prompt blocked: {}",
                reason
            )));
        }

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::InvalidResponse("no candidates".to_string()))?;

        let mut audio = Vec::new();
        let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
        for inline in parts.into_iter().filter_map(|part| part.inline_data) {
            if !inline.mime_type.is_empty() && !inline.mime_type.starts_with("audio/") {
                continue;
            }
            let decoded = STANDARD
                .decode(inline.data.as_bytes())
                .map_err(|e| BackendError::InvalidResponse(format!("base64: {}", e)))?;
            audio.extend(decoded);
        }

        if audio.is_empty() {
            let reason = candidate
                .finish_reason
                .unwrap_or_else(|| "UNKNOWN".to_string());
            return match reason.as_str() {
                "SAFETY" | "PROHIBITED_CONTENT" | "BLOCKLIST" | "RECITATION" | "OTHER" => Err(
                    BackendError::ContentRejected(format!("no audio, finish reason {}", reason)),
                ),
                _ => Err(BackendError::InvalidResponse(format!(
                    "no audio, finish reason {}",
                    reason
                ))),
            };
        }

        Ok(audio)
    }
}

#[async_trait]
impl TtsRepository for GeminiTtsRepository {
    async fn synthesize_segment(&self, text: &str) -> Result<RawAudioBuffer, BackendError> {
        tracing::debug!(
            model = %self.model,
            voice = %self.voice,
            text_length = text.len(),
            "Calling Gemini speech generation"
        );

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text }],
            }],
            generation_config: GenerationConfig {
                response_modalities: ["AUDIO"],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: &self.voice,
                        },
                    },
                },
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let mapped = self.map_transport_error(e);
                tracing::error!(error = %mapped, model = %self.model, "Gemini request failed");
                mapped
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, model = %self.model, "Gemini returned an error status");
            return Err(Self::map_status(status, body));
        }

        let payload: GeminiResponse = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(format!("Gemini parse: {}", e)))?;

        let audio = Self::extract_audio(payload)?;
        if audio.len() % 2 != 0 {
            tracing::warn!(
                audio_size = audio.len(),
                "Gemini returned an odd number of PCM bytes"
            );
        }

        tracing::debug!(audio_size = audio.len(), "Gemini audio received");
        Ok(audio)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
