use std::sync::Arc;

use poder_core::model::poder::{Finalidad, Party, Poder, PoderData, Vigencia};
use poder_core::repository::poder_repository::PoderRepository;
use shared_types::PoderId;

pub struct PodersDB {
    repository: Arc<dyn PoderRepository>,
}

impl PodersDB {
    pub fn new(repository: Arc<dyn PoderRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self) -> PoderId {
        self.create_with_data(dummy_poder_data()).await
    }

    pub async fn create_with_data(&self, data: PoderData) -> PoderId {
        self.repository.create_poder(data).await.unwrap()
    }

    pub async fn get(&self, id: &PoderId) -> Poder {
        self.repository.get_poder(id).await.unwrap().unwrap()
    }
}

pub fn dummy_poder_data() -> PoderData {
    PoderData {
        finalidad: Finalidad::Personal,
        vigencia: Vigencia::Fijo,
        fecha_inicio: "2025-03-01".to_string(),
        fecha_termino: None,
        cantidad_plantas: Some(4),
        declaracion: "Cultivo para consumo personal y privado.".to_string(),
        cedente: Party {
            nombre: "Camila Fuentes".to_string(),
            rut: "15.555.555-5".to_string(),
            domicilio: "Pasaje Los Olmos 12, Ñuñoa".to_string(),
            email: "camila@example.cl".to_string(),
        },
        cesionario: Party {
            nombre: "Tomás Lagos".to_string(),
            rut: "16.666.666-6".to_string(),
            domicilio: "Calle Larga 99, Maipú".to_string(),
            email: "tomas@example.cl".to_string(),
        },
        direccion_cultivo: "Pasaje Los Olmos 12, Ñuñoa".to_string(),
        comuna_region: "Ñuñoa, Región Metropolitana".to_string(),
        firma_cedente: None,
        firma_cesionario: None,
    }
}
