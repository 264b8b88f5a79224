use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire representation of an age bracket row.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AgeBracketDto {
    pub id: i64,
    pub nome: String,
    #[serde(rename = "minIdade")]
    pub min_idade: i64,
    pub status: i32,
    #[serde(rename = "maxIdade")]
    pub max_idade: Option<i64>,
}

impl From<entity::age_bracket::Model> for AgeBracketDto {
    fn from(model: entity::age_bracket::Model) -> Self {
        Self {
            id: model.id,
            nome: model.nome,
            min_idade: model.min_idade,
            status: model.status.to_value(),
            max_idade: model.max_idade,
        }
    }
}

/// Full-body write payload for an age bracket.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveAgeBracketParams {
    pub nome: String,
    #[serde(rename = "minIdade")]
    pub min_idade: i64,
    pub status: i32,
    #[serde(rename = "maxIdade")]
    pub max_idade: i64,
}
