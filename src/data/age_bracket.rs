use entity::prelude::{AgeBracket, ItemStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    model::age_bracket::SaveAgeBracketParams,
    query::{context::TableContext, params::QueryParams},
};

pub struct AgeBracketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AgeBracketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, params: QueryParams) -> Result<Vec<serde_json::Value>, DbErr> {
        TableContext::new(AgeBracket::find())
            .set_parameters(params)
            .build()
            .into_json()
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<entity::age_bracket::Model>, DbErr> {
        AgeBracket::find_by_id(id)
            .filter(entity::age_bracket::Column::Status.is_not_in(ItemStatus::HIDDEN))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        params: SaveAgeBracketParams,
        status: ItemStatus,
    ) -> Result<entity::age_bracket::Model, DbErr> {
        entity::age_bracket::ActiveModel {
            nome: ActiveValue::Set(params.nome),
            min_idade: ActiveValue::Set(params.min_idade),
            status: ActiveValue::Set(status),
            max_idade: ActiveValue::Set(Some(params.max_idade)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i64,
        params: SaveAgeBracketParams,
        status: ItemStatus,
    ) -> Result<Option<entity::age_bracket::Model>, DbErr> {
        let Some(bracket) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::age_bracket::ActiveModel = bracket.into();
        active.nome = ActiveValue::Set(params.nome);
        active.min_idade = ActiveValue::Set(params.min_idade);
        active.status = ActiveValue::Set(status);
        active.max_idade = ActiveValue::Set(Some(params.max_idade));

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i64) -> Result<bool, DbErr> {
        let Some(bracket) = self.get_by_id(id).await? else {
            return Ok(false);
        };

        let mut active: entity::age_bracket::ActiveModel = bracket.into();
        active.status = ActiveValue::Set(ItemStatus::Deleted);
        active.update(self.db).await?;

        Ok(true)
    }
}
