use poder_core::model::poder::PoderStatus;
use serde_json::json;
use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_send_to_sign_ecert_success() {
    // GIVEN
    let (context, id) = TestContext::new_with_poder().await;
    context
        .server_mock
        .ecert_create_envelope(
            json!({
                "name": "Poder simple traspaso de derechos de cultivo",
                "callback_url": format!("{}/webhooks/ecert", context.base_url),
                "signers": [
                    { "name": "Camila Fuentes", "email": "camila@example.cl", "rut": "15.555.555-5", "role": "Cedente" },
                    { "name": "Tomás Lagos", "email": "tomas@example.cl", "rut": "16.666.666-6", "role": "Cesionario" }
                ],
                "document": { "filename": "poder_cultivo.pdf", "mime": "application/pdf" }
            }),
            201,
            r#"{"envelope_id":"ec-123"}"#,
        )
        .await;

    // WHEN
    let resp = context.api.poders.send_to_sign(&id, "ecert").await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(
        body,
        json!({
            "id": i64::from(id),
            "provider": "ecert",
            "provider_response": {
                "status": 201,
                "reason": "Created",
                "raw": r#"{"envelope_id":"ec-123"}"#
            }
        })
    );

    let poder = context.db.poders.get(&id).await;
    assert_eq!(poder.status, PoderStatus::SentToSign);
    assert_eq!(poder.provider.as_deref(), Some("ecert"));
    assert_eq!(poder.provider_envelope_id.as_deref(), Some("TBD"));
}

#[tokio::test]
async fn test_send_to_sign_idok_success() {
    let (context, id) = TestContext::new_with_poder().await;
    context
        .server_mock
        .idok_create_envelope(
            json!({
                "title": "Poder simple traspaso de derechos de cultivo",
                "callback_url": format!("{}/webhooks/idok", context.base_url),
            }),
            200,
            "accepted",
        )
        .await;

    let resp = context.api.poders.send_to_sign(&id, "idok").await;

    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body["provider"], "idok");
    assert_eq!(body["provider_response"]["status"], 200);
    assert_eq!(body["provider_response"]["raw"], "accepted");

    let poder = context.db.poders.get(&id).await;
    assert_eq!(poder.status, PoderStatus::SentToSign);
    assert_eq!(poder.provider.as_deref(), Some("idok"));
}

#[tokio::test]
async fn test_send_to_sign_provider_error_status_is_passed_through() {
    let (context, id) = TestContext::new_with_poder().await;
    context
        .server_mock
        .idok_create_envelope(json!({}), 503, "maintenance")
        .await;

    let resp = context.api.poders.send_to_sign(&id, "idok").await;

    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body["provider_response"]["status"], 503);
    assert_eq!(body["provider_response"]["reason"], "Service Unavailable");
    assert_eq!(body["provider_response"]["raw"], "maintenance");

    let poder = context.db.poders.get(&id).await;
    assert_eq!(poder.status, PoderStatus::SentToSign);
}

#[tokio::test]
async fn test_send_to_sign_unsupported_provider() {
    let (context, id) = TestContext::new_with_poder().await;
    context.server_mock.no_provider_calls().await;

    let resp = context.api.poders.send_to_sign(&id, "docusign").await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0002");

    let poder = context.db.poders.get(&id).await;
    assert_eq!(poder.status, PoderStatus::Draft);
    assert_eq!(poder.provider, None);
}

#[tokio::test]
async fn test_send_to_sign_not_found() {
    let context = TestContext::new().await;
    context.server_mock.no_provider_calls().await;

    let resp = context.api.poders.send_to_sign(&"999", "ecert").await;

    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "BR_0001");
}

#[tokio::test]
async fn test_send_to_sign_not_found_takes_precedence_over_provider() {
    let context = TestContext::new().await;

    let resp = context.api.poders.send_to_sign(&"999", "docusign").await;

    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_send_to_sign_missing_provider_field() {
    let (context, id) = TestContext::new_with_poder().await;

    let resp = context.api.poders.send_to_sign_with_body(&id, json!({})).await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0084");
    assert_eq!(context.db.poders.get(&id).await.status, PoderStatus::Draft);
}
