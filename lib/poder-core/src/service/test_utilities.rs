use shared_types::PoderId;
use time::macros::datetime;

use crate::model::poder::{Finalidad, Party, Poder, PoderData, PoderStatus, Vigencia};

// 1x1 white PNG
pub const DUMMY_SIGNATURE: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAIAAACQd1PeAAAADElEQVR4nGP4//8/AAX+Av4N70a4AAAAAElFTkSuQmCC";

pub fn dummy_poder_data() -> PoderData {
    PoderData {
        finalidad: Finalidad::Medicinal,
        vigencia: Vigencia::Fijo,
        fecha_inicio: "2025-01-01".to_string(),
        fecha_termino: Some("2025-12-31".to_string()),
        cantidad_plantas: Some(6),
        declaracion: "Declaro que el cultivo es para uso exclusivo del cedente.".to_string(),
        cedente: Party {
            nombre: "Ana Pérez".to_string(),
            rut: "11.111.111-1".to_string(),
            domicilio: "Av. Siempre Viva 742, Santiago".to_string(),
            email: "ana@example.cl".to_string(),
        },
        cesionario: Party {
            nombre: "Bruno Soto".to_string(),
            rut: "22.222.222-2".to_string(),
            domicilio: "Los Aromos 123, Valparaíso".to_string(),
            email: "bruno@example.cl".to_string(),
        },
        direccion_cultivo: "Los Aromos 123, Valparaíso".to_string(),
        comuna_region: "Valparaíso, Región de Valparaíso".to_string(),
        firma_cedente: None,
        firma_cesionario: None,
    }
}

pub fn dummy_poder(id: i64) -> Poder {
    Poder {
        id: PoderId::from(id),
        data: dummy_poder_data(),
        status: PoderStatus::Draft,
        provider: None,
        provider_envelope_id: None,
        created_date: datetime!(2025-03-01 10:00 UTC),
        last_modified: datetime!(2025-03-01 10:00 UTC),
    }
}
