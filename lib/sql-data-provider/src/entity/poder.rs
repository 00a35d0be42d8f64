use one_dto_mapper::{From, Into};
use poder_core::model::poder::PoderStatus as ModelPoderStatus;
use sea_orm::entity::prelude::*;
use shared_types::PoderId;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "poder")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: PoderId,

    /// Form data as a JSON document
    #[sea_orm(column_type = "Text")]
    pub data_json: String,

    pub status: PoderStatus,
    pub provider: Option<String>,
    pub provider_envelope_id: Option<String>,

    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, From, Into)]
#[from(ModelPoderStatus)]
#[into(ModelPoderStatus)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum PoderStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "sent_to_sign")]
    SentToSign,
    #[sea_orm(string_value = "signed")]
    Signed,
    #[sea_orm(string_value = "rejected")]
    Rejected,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}
