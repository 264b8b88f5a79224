use sea_orm::entity::prelude::*;

use crate::status::ItemStatus;

/// Age brackets (`faixa_etaria`). An open-ended bracket has no `maxIdade`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "faixa_etaria")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nome: String,
    #[sea_orm(column_name = "minIdade")]
    pub min_idade: i64,
    pub status: ItemStatus,
    #[sea_orm(column_name = "maxIdade")]
    pub max_idade: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
