use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use poder_core::repository::DataRepository;
use poder_core::repository::poder_repository::PoderRepository;
use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};

use crate::poder::PoderProvider;

mod entity;
mod mapper;
pub mod poder;

#[cfg(test)]
mod test_utilities;

pub type DbConn = DatabaseConnection;

#[derive(Clone)]
pub struct DataLayer {
    // Used for tests for now
    #[allow(unused)]
    db: DbConn,
    poder_repository: Arc<dyn PoderRepository>,
}

impl DataLayer {
    pub fn build(db: DbConn) -> Self {
        let poder_repository = Arc::new(PoderProvider { db: db.clone() });

        Self {
            db,
            poder_repository,
        }
    }
}

impl DataRepository for DataLayer {
    fn get_poder_repository(&self) -> Arc<dyn PoderRepository> {
        self.poder_repository.clone()
    }
}

/// Connects to the database and, when requested, brings the schema up to date
pub async fn db_conn(
    database_url: impl Into<ConnectOptions>,
    run_migrations: bool,
) -> Result<DbConn, DbErr> {
    let mut options: ConnectOptions = database_url.into();
    options.sqlx_logging(false);

    let db = sea_orm::Database::connect(options).await?;

    if run_migrations {
        Migrator::up(&db, None).await?;
        tracing::debug!("Database migrations applied");
    }

    Ok(db)
}
