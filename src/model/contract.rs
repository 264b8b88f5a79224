use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire representation of a contract row.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContractDto {
    pub id: i64,
    #[serde(rename = "prestadorId")]
    pub prestador_id: i64,
    #[serde(rename = "produtorId")]
    pub produtor_id: i64,
    pub evento: i64,
    pub status: i32,
    #[serde(rename = "criadoEm")]
    pub criado_em: String,
}

impl From<entity::contract::Model> for ContractDto {
    fn from(model: entity::contract::Model) -> Self {
        Self {
            id: model.id,
            prestador_id: model.prestador_id,
            produtor_id: model.produtor_id,
            evento: model.evento,
            status: model.status.to_value(),
            criado_em: model.criado_em,
        }
    }
}

/// Full-body write payload for a contract.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveContractParams {
    #[serde(rename = "prestadorId")]
    pub prestador_id: i64,
    #[serde(rename = "produtorId")]
    pub produtor_id: i64,
    pub evento: i64,
    pub status: i32,
    #[serde(rename = "criadoEm")]
    pub criado_em: String,
}
