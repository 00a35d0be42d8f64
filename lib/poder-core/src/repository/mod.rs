use std::sync::Arc;

use poder_repository::PoderRepository;

pub mod error;
pub mod poder_repository;

pub trait DataRepository: Send + Sync {
    fn get_poder_repository(&self) -> Arc<dyn PoderRepository>;
}
