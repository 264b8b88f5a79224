use sea_orm::entity::prelude::*;

use crate::status::ItemStatus;

/// Venues (`local`). `categorias` holds a JSON array of category ids.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "local")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nome: String,
    pub descricao: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub status: ItemStatus,
    pub categorias: Json,
    pub pais: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
