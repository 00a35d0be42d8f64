use poder_core::model::poder::Poder;
use poder_core::repository::error::DataLayerError;

use crate::entity::poder;

impl TryFrom<poder::Model> for Poder {
    type Error = DataLayerError;

    fn try_from(value: poder::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            data: serde_json::from_str(&value.data_json)?,
            status: value.status.into(),
            provider: value.provider,
            provider_envelope_id: value.provider_envelope_id,
            created_date: value.created_date,
            last_modified: value.last_modified,
        })
    }
}
