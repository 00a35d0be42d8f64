use poder_core::model::poder::PoderStatus;
use serde_json::json;
use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_webhook_ecert_acknowledged() {
    let context = TestContext::new().await;

    let resp = context
        .api
        .webhooks
        .notify("ecert", json!({ "envelope_id": "ec-123", "status": "signed" }))
        .await;

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await, json!({ "ok": true }));
}

#[tokio::test]
async fn test_webhook_idok_acknowledged() {
    let context = TestContext::new().await;

    let resp = context
        .api
        .webhooks
        .notify("idok", json!(["any", "json", 1]))
        .await;

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await, json!({ "ok": true }));
}

#[tokio::test]
async fn test_webhook_leaves_poder_untouched() {
    let (context, id) = TestContext::new_with_poder().await;
    let before = context.db.poders.get(&id).await;

    let resp = context
        .api
        .webhooks
        .notify("ecert", json!({ "poder_id": i64::from(id), "status": "signed" }))
        .await;
    assert_eq!(resp.status(), 200);

    let after = context.db.poders.get(&id).await;
    assert_eq!(after, before);
    assert_eq!(after.status, PoderStatus::Draft);
}

#[tokio::test]
async fn test_webhook_unknown_provider() {
    let context = TestContext::new().await;

    let resp = context.api.webhooks.notify("docusign", json!({})).await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0002");
}

#[tokio::test]
async fn test_webhook_malformed_json() {
    let context = TestContext::new().await;

    let resp = context.api.webhooks.notify_raw("ecert", "{not json").await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0084");
}

#[tokio::test]
async fn test_webhook_without_content_type_acknowledged() {
    let context = TestContext::new().await;

    let resp = context
        .api
        .webhooks
        .notify_without_content_type("idok", r#"{"envelope_id": "id-9", "status": "rejected"}"#)
        .await;

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await, json!({ "ok": true }));
}

#[tokio::test]
async fn test_webhook_empty_body() {
    let context = TestContext::new().await;

    let resp = context
        .api
        .webhooks
        .notify_without_content_type("ecert", "")
        .await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0084");
}
