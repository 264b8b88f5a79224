use sea_orm::entity::prelude::*;

use crate::status::ItemStatus;

/// Contracts (`contrato`) binding a provider and a producer to an event.
/// `criadoEm` is a `YYYY-MM-DD HH:MM:SS` timestamp string.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contrato")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "prestadorId")]
    pub prestador_id: i64,
    #[sea_orm(column_name = "produtorId")]
    pub produtor_id: i64,
    pub evento: i64,
    pub status: ItemStatus,
    #[sea_orm(column_name = "criadoEm")]
    pub criado_em: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
