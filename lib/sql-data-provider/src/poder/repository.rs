use async_trait::async_trait;
use poder_core::model::poder::{Poder, PoderData, UpdatePoderRequest};
use poder_core::repository::error::DataLayerError;
use poder_core::repository::poder_repository::PoderRepository;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, EntityTrait};
use shared_types::PoderId;
use time::OffsetDateTime;

use super::PoderProvider;
use crate::entity::poder;
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};

#[async_trait]
impl PoderRepository for PoderProvider {
    async fn create_poder(&self, data: PoderData) -> Result<PoderId, DataLayerError> {
        let now = OffsetDateTime::now_utc();

        let model = poder::ActiveModel {
            id: NotSet,
            data_json: Set(serde_json::to_string(&data)?),
            status: Set(poder::PoderStatus::Draft),
            provider: Set(None),
            provider_envelope_id: Set(None),
            created_date: Set(now),
            last_modified: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(to_data_layer_error)?;

        Ok(model.id)
    }

    async fn get_poder(&self, id: &PoderId) -> Result<Option<Poder>, DataLayerError> {
        poder::Entity::find_by_id(*id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?
            .map(Poder::try_from)
            .transpose()
    }

    async fn update_poder(&self, request: UpdatePoderRequest) -> Result<(), DataLayerError> {
        let data_json = match request.data {
            Some(data) => Set(serde_json::to_string(&data)?),
            None => NotSet,
        };

        let model = poder::ActiveModel {
            id: Unchanged(request.id),
            data_json,
            status: request
                .status
                .map(|status| Set(status.into()))
                .unwrap_or_default(),
            provider: request
                .provider
                .map(|provider| Set(Some(provider)))
                .unwrap_or_default(),
            provider_envelope_id: request
                .provider_envelope_id
                .map(|envelope_id| Set(Some(envelope_id)))
                .unwrap_or_default(),
            created_date: NotSet,
            last_modified: Set(OffsetDateTime::now_utc()),
        };

        model
            .update(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;

        Ok(())
    }
}
