use sea_orm::DatabaseConnection;

mod mapper;
pub mod repository;


pub(crate) struct PoderProvider {
    pub db: DatabaseConnection,
}
