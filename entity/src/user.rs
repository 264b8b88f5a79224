use sea_orm::entity::prelude::*;

use crate::status::ItemStatus;

/// Users (`usuarios`). A user may act as a service provider (`prestador`),
/// a producer (`produtor`), or both.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nome: String,
    pub prestador: bool,
    pub produtor: bool,
    pub data_nascimento: String,
    pub status: ItemStatus,
    pub categorias: Json,
    pub cnpj: String,
    pub nacionalidade: String,
    pub genero: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
