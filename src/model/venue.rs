use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire representation of a venue row. `categorias` is the stored JSON
/// array of category ids.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VenueDto {
    pub id: i64,
    pub nome: String,
    pub descricao: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub status: i32,
    #[schema(value_type = Vec<i64>)]
    pub categorias: serde_json::Value,
    pub pais: String,
}

impl From<entity::venue::Model> for VenueDto {
    fn from(model: entity::venue::Model) -> Self {
        Self {
            id: model.id,
            nome: model.nome,
            descricao: model.descricao,
            bairro: model.bairro,
            cidade: model.cidade,
            estado: model.estado,
            status: model.status.to_value(),
            categorias: model.categorias,
            pais: model.pais,
        }
    }
}

/// Full-body write payload for a venue.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveVenueParams {
    pub nome: String,
    pub descricao: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub status: i32,
    #[schema(value_type = Vec<i64>)]
    pub categorias: serde_json::Value,
    pub pais: String,
}
