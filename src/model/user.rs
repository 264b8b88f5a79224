use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire representation of a user row.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub nome: String,
    pub prestador: bool,
    pub produtor: bool,
    pub data_nascimento: String,
    pub status: i32,
    #[schema(value_type = Vec<i64>)]
    pub categorias: serde_json::Value,
    pub cnpj: String,
    pub nacionalidade: String,
    pub genero: String,
}

impl From<entity::user::Model> for UserDto {
    fn from(model: entity::user::Model) -> Self {
        Self {
            id: model.id,
            nome: model.nome,
            prestador: model.prestador,
            produtor: model.produtor,
            data_nascimento: model.data_nascimento,
            status: model.status.to_value(),
            categorias: model.categorias,
            cnpj: model.cnpj,
            nacionalidade: model.nacionalidade,
            genero: model.genero,
        }
    }
}

/// Full-body write payload for a user. The flag fields accept either
/// booleans or the 0/1 surrogate.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveUserParams {
    pub nome: String,
    #[serde(deserialize_with = "super::lenient_bool")]
    pub prestador: bool,
    #[serde(deserialize_with = "super::lenient_bool")]
    pub produtor: bool,
    pub data_nascimento: String,
    pub status: i32,
    #[schema(value_type = Vec<i64>)]
    pub categorias: serde_json::Value,
    pub cnpj: String,
    pub nacionalidade: String,
    pub genero: String,
}
