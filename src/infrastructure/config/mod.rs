use crate::domain::tts::SynthesisSettings;
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Gemini speech backend
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub gemini_voice: String,
    // Synthesis pipeline
    pub sample_rate: u32,
    pub segment_soft_limit: usize,
    pub max_text_length: usize,
    pub segment_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            gemini_api_key: env::var("GEMINI_API_KEY")?,
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash-preview-tts".to_string()),
            gemini_voice: env::var("GEMINI_VOICE").unwrap_or_else(|_| "Kore".to_string()),
            sample_rate: env::var("TTS_SAMPLE_RATE")
                .unwrap_or_else(|_| "24000".to_string())
                .parse()?,
            segment_soft_limit: env::var("TTS_SEGMENT_SOFT_LIMIT")
                .unwrap_or_else(|_| "800".to_string())
                .parse()?,
            max_text_length: env::var("TTS_MAX_TEXT_LENGTH")
                .unwrap_or_else(|_| "50000".to_string())
                .parse()?,
            segment_timeout_secs: env::var("TTS_SEGMENT_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn synthesis_settings(&self) -> SynthesisSettings {
        SynthesisSettings {
            sample_rate: self.sample_rate,
            segment_soft_limit: self.segment_soft_limit,
            max_text_length: self.max_text_length,
            segment_timeout: Duration::from_secs(self.segment_timeout_secs),
        }
    }
}
