use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_get_poder_success() {
    // GIVEN
    let (context, id) = TestContext::new_with_poder().await;

    // WHEN
    let resp = context.api.poders.get(&id).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body["id"], i64::from(id));
    assert_eq!(body["status"], "draft");
    assert!(body["provider"].is_null());
    assert_eq!(body["data"]["finalidad"], "personal");
    assert_eq!(body["data"]["vigencia"], "fijo");
    assert_eq!(body["data"]["cedente_nombre"], "Camila Fuentes");
    assert_eq!(body["data"]["cesionario_rut"], "16.666.666-6");
    assert!(body["created_date"].is_string());
}

#[tokio::test]
async fn test_get_poder_not_found() {
    let context = TestContext::new().await;

    let resp = context.api.poders.get(&"999").await;

    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "BR_0001");
}

#[tokio::test]
async fn test_get_poder_invalid_id() {
    let context = TestContext::new().await;

    let resp = context.api.poders.get(&"abc").await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0084");
}
