use ct_codecs::{Base64, Decoder};
use poder_core::model::poder::{PoderStatus, Vigencia};
use similar_asserts::assert_eq;

use crate::utils::context::TestContext;
use crate::utils::db_clients::poders::dummy_poder_data;

fn decode_document(body: &serde_json::Value) -> String {
    let encoded = body["pdf_base64_html"].as_str().unwrap();
    String::from_utf8(Base64::decode_to_vec(encoded, None).unwrap()).unwrap()
}

#[tokio::test]
async fn test_generate_pdf_success() {
    // GIVEN
    let (context, id) = TestContext::new_with_poder().await;

    // WHEN
    let resp = context.api.poders.generate_pdf(&id).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body["id"], i64::from(id));

    let document = decode_document(&body);
    assert!(document.contains("Camila Fuentes"));
    assert!(document.contains("Tomás Lagos"));
    assert!(document.contains("desde 2025-03-01 hasta ________"));

    // rendering does not change the stored state
    assert_eq!(context.db.poders.get(&id).await.status, PoderStatus::Draft);
}

#[tokio::test]
async fn test_generate_pdf_indefinite_validity() {
    let context = TestContext::new().await;
    let mut data = dummy_poder_data();
    data.vigencia = Vigencia::Indefinido;
    let id = context.db.poders.create_with_data(data).await;

    let resp = context.api.poders.generate_pdf(&id).await;

    assert_eq!(resp.status(), 200);
    let document = decode_document(&resp.json_value().await);
    assert!(document.contains("indefinida"));
    assert!(!document.contains("desde 2025-03-01"));
}

#[tokio::test]
async fn test_generate_pdf_not_found() {
    let context = TestContext::new().await;

    let resp = context.api.poders.generate_pdf(&"999").await;

    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "BR_0001");
}
