use sea_orm::entity::prelude::*;

use crate::status::ItemStatus;

/// Events (`eventos`). `local` and `faixa_etaria` reference those tables
/// by id; `categorias` holds a JSON array of category ids.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "eventos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nome: String,
    pub produtor: i64,
    pub status: ItemStatus,
    pub local: i64,
    pub faixa_etaria: i64,
    pub categorias: Json,
    pub comeca: String,
    pub termina: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
