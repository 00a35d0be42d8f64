use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_health_check() {
    let context = TestContext::new().await;

    let resp = context.api.other.health().await;

    assert_eq!(resp.status(), 204);
}

#[tokio::test]
async fn test_form_page() {
    let context = TestContext::new().await;

    let resp = context.api.other.form_page().await;

    assert_eq!(resp.status(), 200);
    assert!(resp.header("content-type").unwrap().starts_with("text/html"));
    let page = resp.text().await;
    assert!(page.contains(r#"<canvas id="firma_cedente""#));
    assert!(page.contains(r#"<canvas id="firma_cesionario""#));
    assert!(page.contains("/assets/signature-pad.js"));
}

#[tokio::test]
async fn test_signature_pad_script() {
    let context = TestContext::new().await;

    let resp = context.api.other.signature_pad_script().await;

    assert_eq!(resp.status(), 200);
    assert!(
        resp.header("content-type")
            .unwrap()
            .starts_with("text/javascript")
    );
    assert!(resp.text().await.contains("devicePixelRatio"));
}

#[tokio::test]
async fn test_openapi_document() {
    let context = TestContext::new().await;

    let resp = context.api.other.openapi().await;

    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert!(body["paths"]["/api/poder/{id}/send-to-sign"].is_object());
}
