use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire representation of a category row.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub nome: String,
    pub status: i32,
    pub descricao: String,
    pub parente: i64,
}

impl From<entity::category::Model> for CategoryDto {
    fn from(model: entity::category::Model) -> Self {
        Self {
            id: model.id,
            nome: model.nome,
            status: model.status.to_value(),
            descricao: model.descricao,
            parente: model.parente,
        }
    }
}

/// Full-body write payload for a category. Structural validation runs
/// against the raw JSON before this is deserialized.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveCategoryParams {
    pub nome: String,
    pub status: i32,
    pub descricao: String,
    pub parente: i64,
}
