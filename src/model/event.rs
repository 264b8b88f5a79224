use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire representation of an event row.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventDto {
    pub id: i64,
    pub nome: String,
    pub produtor: i64,
    pub status: i32,
    pub local: i64,
    pub faixa_etaria: i64,
    #[schema(value_type = Vec<i64>)]
    pub categorias: serde_json::Value,
    pub comeca: String,
    pub termina: String,
}

impl From<entity::event::Model> for EventDto {
    fn from(model: entity::event::Model) -> Self {
        Self {
            id: model.id,
            nome: model.nome,
            produtor: model.produtor,
            status: model.status.to_value(),
            local: model.local,
            faixa_etaria: model.faixa_etaria,
            categorias: model.categorias,
            comeca: model.comeca,
            termina: model.termina,
        }
    }
}

/// Full-body write payload for an event.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveEventParams {
    pub nome: String,
    pub produtor: i64,
    pub status: i32,
    pub local: i64,
    pub faixa_etaria: i64,
    #[schema(value_type = Vec<i64>)]
    pub categorias: serde_json::Value,
    pub comeca: String,
    pub termina: String,
}
