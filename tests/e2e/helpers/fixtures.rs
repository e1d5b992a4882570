use super::api_client::TestClient;
use anyhow::{ensure, Result};
use hyper::StatusCode;
use scriptcast::domain::tts::GenerationResult;
use serde_json::json;

pub struct TestFixtures {
    client: TestClient,
}

impl TestFixtures {
    pub fn new(client: TestClient) -> Self {
        Self { client }
    }

    /// Run a generation through the API and return its result
    pub async fn generate(&self, text: &str) -> Result<GenerationResult> {
        let response = self
            .client
            .post("/api/tts/generate", &json!({ "text": text }))
            .await?;

        ensure!(
            response.status == StatusCode::CREATED,
            "generation failed with {}: {:?}",
            response.status,
            response.body
        );

        response.json()
    }
}

/// A script of `count` short paragraphs, one segment each at the test soft limit
pub fn script(count: usize) -> String {
    (1..=count)
        .map(|i| format!("Paragraph number {} of the script.", i))
        .collect::<Vec<_>>()
        .join("\n\n")
}
