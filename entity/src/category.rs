use sea_orm::entity::prelude::*;

use crate::status::ItemStatus;

/// Event categories, arranged as a tree through `parente` (-1 for roots).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categorias")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nome: String,
    pub status: ItemStatus,
    pub descricao: String,
    pub parente: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
