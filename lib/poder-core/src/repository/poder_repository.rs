use shared_types::PoderId;

use super::error::DataLayerError;
use crate::model::poder::{Poder, PoderData, UpdatePoderRequest};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait PoderRepository: Send + Sync {
    /// Stores a new submission in `draft` state
    async fn create_poder(&self, data: PoderData) -> Result<PoderId, DataLayerError>;

    async fn get_poder(&self, id: &PoderId) -> Result<Option<Poder>, DataLayerError>;

    /// Patches the set fields, `last_modified` is always refreshed
    async fn update_poder(&self, request: UpdatePoderRequest) -> Result<(), DataLayerError>;
}
