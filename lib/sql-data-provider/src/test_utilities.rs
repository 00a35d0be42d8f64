use poder_core::model::poder::{Finalidad, Party, PoderData, Vigencia};
use time::OffsetDateTime;
use time::macros::datetime;

use crate::{DataLayer, db_conn};

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2005-04-02 21:37 +1)
}

pub fn dummy_poder_data() -> PoderData {
    PoderData {
        finalidad: Finalidad::Cientifico,
        vigencia: Vigencia::Fijo,
        fecha_inicio: "2025-02-01".to_string(),
        fecha_termino: None,
        cantidad_plantas: None,
        declaracion: "Cultivo con fines de investigación.".to_string(),
        cedente: Party {
            nombre: "Carla Muñoz".to_string(),
            rut: "12.345.678-5".to_string(),
            domicilio: "Temuco".to_string(),
            email: "carla@example.cl".to_string(),
        },
        cesionario: Party {
            nombre: "Diego Rojas".to_string(),
            rut: "9.876.543-2".to_string(),
            domicilio: "Concepción".to_string(),
            email: "diego@example.cl".to_string(),
        },
        direccion_cultivo: "Camino Viejo 45, Temuco".to_string(),
        comuna_region: "Temuco, Región de La Araucanía".to_string(),
        firma_cedente: None,
        firma_cesionario: None,
    }
}

pub async fn setup_test_data_layer_and_connection_with_custom_url(database_url: &str) -> DataLayer {
    let db = db_conn(database_url, true).await.unwrap();
    DataLayer::build(db)
}

pub async fn setup_test_data_layer_and_connection() -> DataLayer {
    setup_test_data_layer_and_connection_with_custom_url("sqlite::memory:").await
}
