use poder_core::model::poder::{Finalidad, PoderStatus, Vigencia};
use shared_types::PoderId;
use similar_asserts::assert_eq;

use crate::fixtures::{SIGNATURE_DATA_URL, poder_form};
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_create_poder_success() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.poders.create(poder_form()).await;

    // THEN
    assert_eq!(resp.status(), 201);
    let body = resp.json_value().await;
    assert_eq!(body["status"], "draft");

    let id: PoderId = serde_json::from_value(body["id"].to_owned()).unwrap();
    let poder = context.db.poders.get(&id).await;
    assert_eq!(poder.status, PoderStatus::Draft);
    assert_eq!(poder.data.finalidad, Finalidad::Medicinal);
    assert_eq!(poder.data.cedente.nombre, "Ana Pérez");
    assert_eq!(poder.data.cesionario.email, "bruno@example.cl");
    assert_eq!(poder.data.cantidad_plantas, Some(6));
    assert_eq!(poder.data.firma_cedente, None);
    assert_eq!(poder.provider, None);
}

#[tokio::test]
async fn test_create_poder_assigns_new_ids() {
    let context = TestContext::new().await;

    let first = context.api.poders.create(poder_form()).await;
    let second = context.api.poders.create(poder_form()).await;

    assert_eq!(first.status(), 201);
    assert_eq!(second.status(), 201);
    let first = first.json_value().await;
    let second = second.json_value().await;
    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_create_poder_with_signatures() {
    let context = TestContext::new().await;

    let mut form = poder_form();
    form["firma_cedente"] = SIGNATURE_DATA_URL.into();
    form["firma_cesionario"] = SIGNATURE_DATA_URL.into();

    let resp = context.api.poders.create(form).await;

    assert_eq!(resp.status(), 201);
    let body = resp.json_value().await;
    let id: PoderId = serde_json::from_value(body["id"].to_owned()).unwrap();
    let poder = context.db.poders.get(&id).await;
    assert_eq!(poder.data.firma_cedente.as_deref(), Some(SIGNATURE_DATA_URL));
    assert_eq!(poder.data.firma_cesionario.as_deref(), Some(SIGNATURE_DATA_URL));
}

#[tokio::test]
async fn test_create_poder_vigencia_defaults_to_fijo() {
    let context = TestContext::new().await;

    let mut form = poder_form();
    form.as_object_mut().unwrap().remove("vigencia");
    form.as_object_mut().unwrap().remove("fecha_termino");

    let resp = context.api.poders.create(form).await;

    assert_eq!(resp.status(), 201);
    let body = resp.json_value().await;
    let id: PoderId = serde_json::from_value(body["id"].to_owned()).unwrap();
    let poder = context.db.poders.get(&id).await;
    assert_eq!(poder.data.vigencia, Vigencia::Fijo);
    assert_eq!(poder.data.fecha_termino, None);
}

#[tokio::test]
async fn test_create_poder_invalid_email() {
    let context = TestContext::new().await;

    let mut form = poder_form();
    form["cesionario_email"] = "not-an-email".into();

    let resp = context.api.poders.create(form).await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0003");
}

#[tokio::test]
async fn test_create_poder_invalid_finalidad() {
    let context = TestContext::new().await;

    let mut form = poder_form();
    form["finalidad"] = "comercial".into();

    let resp = context.api.poders.create(form).await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0084");
}

#[tokio::test]
async fn test_create_poder_missing_required_field() {
    let context = TestContext::new().await;

    let mut form = poder_form();
    form.as_object_mut().unwrap().remove("cedente_rut");

    let resp = context.api.poders.create(form).await;

    assert_eq!(resp.status(), 400);
    let body = resp.json_value().await;
    assert_eq!(body["code"], "BR_0084");
    assert!(body["cause"]["message"].as_str().unwrap().contains("cedente_rut"));
}

#[tokio::test]
async fn test_create_poder_invalid_signature_image() {
    let context = TestContext::new().await;

    let mut form = poder_form();
    form["firma_cedente"] = "data:text/plain;base64,aG9sYQ==".into();

    let resp = context.api.poders.create(form).await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0006");
}

#[tokio::test]
async fn test_create_poder_signature_not_decodable() {
    let context = TestContext::new().await;

    let mut form = poder_form();
    form["firma_cesionario"] = "data:image/png;base64,aGVsbG8=".into();

    let resp = context.api.poders.create(form).await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0006");
}
