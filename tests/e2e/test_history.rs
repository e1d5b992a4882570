use crate::e2e::helpers;

use helpers::assertions::{assert_history_entry, decode_wav};
use helpers::backend_mocks::samples_for;
use helpers::{TestContext, TEST_SAMPLE_RATE};
use hyper::StatusCode;
use serde_json::Value;
use test_context::test_context;
use uuid::Uuid;

async fn list(ctx: &TestContext) -> Vec<Value> {
    let response = ctx.client.get("/api/history").await.unwrap();
    response.assert_status(StatusCode::OK);
    response.body.unwrap().as_array().unwrap().clone()
}

fn id_of(entry: &Value) -> &str {
    entry.get("id").and_then(|v| v.as_str()).unwrap()
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_entries_most_recent_first(ctx: &TestContext) {
    let first = ctx.fixtures.generate("First script.").await.unwrap();
    let second = ctx.fixtures.generate("Second script.").await.unwrap();

    let entries = list(ctx).await;

    assert_eq!(entries.len(), 2);
    entries.iter().for_each(assert_history_entry);
    assert_eq!(id_of(&entries[0]), second.entry.id.to_string());
    assert_eq!(id_of(&entries[1]), first.entry.id.to_string());
    assert_eq!(entries[0].get("is_active").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(entries[1].get("is_active").and_then(|v| v.as_bool()), Some(false));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_restore_entry_with_its_source_text(ctx: &TestContext) {
    let source = "First script.\n\nWith a second paragraph.";
    let first = ctx.fixtures.generate(source).await.unwrap();
    ctx.fixtures.generate("Second script.").await.unwrap();

    let response = ctx
        .client
        .post_empty(&format!("/api/history/{}/restore", first.entry.id))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.unwrap();
    assert_eq!(body.get("source_text").and_then(|v| v.as_str()), Some(source));
    assert_eq!(body.get("is_active").and_then(|v| v.as_bool()), Some(true));

    let active = ctx.client.get("/api/tts/active").await.unwrap();
    active.assert_status(StatusCode::OK);
    let decoded = decode_wav(&active.body_bytes, TEST_SAMPLE_RATE);
    assert_eq!(decoded, samples_for(source));

    let entries = list(ctx).await;
    assert_eq!(entries[1].get("is_active").and_then(|v| v.as_bool()), Some(true));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_when_restoring_unknown_entry(ctx: &TestContext) {
    let response = ctx
        .client
        .post_empty(&format!("/api/history/{}/restore", Uuid::new_v4()))
        .await
        .unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_audio_of_any_entry(ctx: &TestContext) {
    let first = ctx.fixtures.generate("First script.").await.unwrap();
    ctx.fixtures.generate("Second script.").await.unwrap();

    let response = ctx
        .client
        .get(&format!("/api/history/{}/audio", first.entry.id))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/wav");
    let decoded = decode_wav(&response.body_bytes, TEST_SAMPLE_RATE);
    assert_eq!(decoded, samples_for("First script."));

    let missing = ctx
        .client
        .get(&format!("/api/history/{}/audio", Uuid::new_v4()))
        .await
        .unwrap();
    missing.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_clear_active_result_when_deleting_active_entry(ctx: &TestContext) {
    let result = ctx.fixtures.generate("Only script.").await.unwrap();

    let response = ctx
        .client
        .delete(&format!("/api/history/{}", result.entry.id))
        .await
        .unwrap();
    response.assert_status(StatusCode::NO_CONTENT);

    assert!(list(ctx).await.is_empty());

    let active = ctx.client.get("/api/tts/active").await.unwrap();
    active.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_active_result_when_deleting_other_entry(ctx: &TestContext) {
    let first = ctx.fixtures.generate("First script.").await.unwrap();
    let second = ctx.fixtures.generate("Second script.").await.unwrap();

    ctx.client
        .delete(&format!("/api/history/{}", first.entry.id))
        .await
        .unwrap()
        .assert_status(StatusCode::NO_CONTENT);

    let entries = list(ctx).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(id_of(&entries[0]), second.entry.id.to_string());

    let active = ctx.client.get("/api/tts/active").await.unwrap();
    active.assert_status(StatusCode::OK);
    assert_eq!(
        decode_wav(&active.body_bytes, TEST_SAMPLE_RATE),
        samples_for("Second script.")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_ignore_deletion_of_unknown_entry(ctx: &TestContext) {
    ctx.fixtures.generate("Kept script.").await.unwrap();

    let response = ctx
        .client
        .delete(&format!("/api/history/{}", Uuid::new_v4()))
        .await
        .unwrap();

    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(list(ctx).await.len(), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_clear_whole_history(ctx: &TestContext) {
    ctx.fixtures.generate("First script.").await.unwrap();
    ctx.fixtures.generate("Second script.").await.unwrap();

    let response = ctx.client.delete("/api/history").await.unwrap();
    response.assert_status(StatusCode::NO_CONTENT);

    assert!(list(ctx).await.is_empty());
    ctx.client
        .get("/api/tts/active")
        .await
        .unwrap()
        .assert_status(StatusCode::NOT_FOUND);
}
