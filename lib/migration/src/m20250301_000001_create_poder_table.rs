use sea_orm_migration::prelude::*;

use crate::datatype::timestamp;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Poder::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Poder::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Poder::DataJson).text().not_null())
                    .col(
                        ColumnDef::new(Poder::Status)
                            .string()
                            .not_null()
                            .default("draft"),
                    )
                    .col(ColumnDef::new(Poder::Provider).string().null())
                    .col(ColumnDef::new(Poder::ProviderEnvelopeId).string().null())
                    .col(timestamp(Poder::CreatedDate, manager))
                    .col(timestamp(Poder::LastModified, manager))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Poder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Poder {
    Table,
    Id,
    DataJson,
    Status,
    Provider,
    ProviderEnvelopeId,
    CreatedDate,
    LastModified,
}
