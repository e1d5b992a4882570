use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use scriptcast::controllers::{history::HistoryController, tts::TtsController};
use scriptcast::domain::history::{HistoryService, ResourceCache};
use scriptcast::domain::tts::TtsService;
use scriptcast::infrastructure::config::{Config, LogFormat};
use scriptcast::infrastructure::http::start_http_server;
use scriptcast::infrastructure::repositories::{GeminiTtsRepository, TtsRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting scriptcast on {}:{}",
        config.host,
        config.port
    );

    let settings = config.synthesis_settings();
    tracing::info!(
        model = %config.gemini_model,
        voice = %config.gemini_voice,
        sample_rate = settings.sample_rate,
        segment_soft_limit = settings.segment_soft_limit,
        max_text_length = settings.max_text_length,
        segment_timeout_secs = settings.segment_timeout.as_secs(),
        development = config.is_development(),
        "Synthesis pipeline configured"
    );

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    let tts_repo: Arc<dyn TtsRepository> = Arc::new(GeminiTtsRepository::new(
        config.gemini_api_key.clone(),
        config.gemini_base_url.clone(),
        config.gemini_model.clone(),
        config.gemini_voice.clone(),
    ));
    let cache = ResourceCache::shared();

    // 2. Instantiate services
    let history_service = Arc::new(HistoryService::new(cache.clone()));
    let tts_service = Arc::new(TtsService::new(tts_repo, cache, settings));

    // 3. Instantiate controllers
    let tts_controller = Arc::new(TtsController::new(tts_service, history_service.clone()));
    let history_controller = Arc::new(HistoryController::new(history_service));

    start_http_server(Arc::new(config), tts_controller, history_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "scriptcast=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "scriptcast=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
