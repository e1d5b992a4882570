use scriptcast::controllers::{history::HistoryController, tts::TtsController};
use scriptcast::domain::history::{HistoryService, ResourceCache};
use scriptcast::domain::tts::{SynthesisSettings, TtsService};
use scriptcast::infrastructure::http::build_router;
use std::sync::Arc;
use std::time::Duration;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod api_client;
pub mod assertions;
pub mod fixtures;

use api_client::TestClient;
use backend_mocks::MockTtsRepository;
use fixtures::TestFixtures;

/// Segment soft limit used by the test server, small enough that short
/// multi-paragraph scripts span several segments.
pub const TEST_SOFT_LIMIT: usize = 40;
pub const TEST_MAX_TEXT_LENGTH: usize = 2_000;
pub const TEST_SAMPLE_RATE: u32 = 24_000;

pub struct TestContext {
    pub client: TestClient,
    pub backend: Arc<MockTtsRepository>,
    pub fixtures: TestFixtures,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let backend = Arc::new(MockTtsRepository::new());
            let settings = SynthesisSettings {
                sample_rate: TEST_SAMPLE_RATE,
                segment_soft_limit: TEST_SOFT_LIMIT,
                max_text_length: TEST_MAX_TEXT_LENGTH,
                segment_timeout: Duration::from_secs(2),
            };

            // Wire the app against the in-process backend
            let cache = ResourceCache::shared();
            let history_service = Arc::new(HistoryService::new(cache.clone()));
            let tts_service = Arc::new(TtsService::new(backend.clone(), cache, settings));
            let tts_controller = Arc::new(TtsController::new(tts_service, history_service.clone()));
            let history_controller = Arc::new(HistoryController::new(history_service));
            let app = build_router(tts_controller, history_controller);

            // Start server
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            let client = TestClient::new(&base_url);
            let fixtures = TestFixtures::new(client.clone());

            Self {
                client,
                backend,
                fixtures,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Server task ends with the runtime
        }
    }
}
