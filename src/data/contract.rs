use entity::prelude::{Contract, ItemStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    model::contract::SaveContractParams,
    query::{context::TableContext, params::QueryParams},
};

pub struct ContractRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContractRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, params: QueryParams) -> Result<Vec<serde_json::Value>, DbErr> {
        TableContext::new(Contract::find())
            .set_parameters(params)
            .build()
            .into_json()
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<entity::contract::Model>, DbErr> {
        Contract::find_by_id(id)
            .filter(entity::contract::Column::Status.is_not_in(ItemStatus::HIDDEN))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        params: SaveContractParams,
        status: ItemStatus,
    ) -> Result<entity::contract::Model, DbErr> {
        entity::contract::ActiveModel {
            prestador_id: ActiveValue::Set(params.prestador_id),
            produtor_id: ActiveValue::Set(params.produtor_id),
            evento: ActiveValue::Set(params.evento),
            status: ActiveValue::Set(status),
            criado_em: ActiveValue::Set(params.criado_em),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i64,
        params: SaveContractParams,
        status: ItemStatus,
    ) -> Result<Option<entity::contract::Model>, DbErr> {
        let Some(contract) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::contract::ActiveModel = contract.into();
        active.prestador_id = ActiveValue::Set(params.prestador_id);
        active.produtor_id = ActiveValue::Set(params.produtor_id);
        active.evento = ActiveValue::Set(params.evento);
        active.status = ActiveValue::Set(status);
        active.criado_em = ActiveValue::Set(params.criado_em);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i64) -> Result<bool, DbErr> {
        let Some(contract) = self.get_by_id(id).await? else {
            return Ok(false);
        };

        let mut active: entity::contract::ActiveModel = contract.into();
        active.status = ActiveValue::Set(ItemStatus::Deleted);
        active.update(self.db).await?;

        Ok(true)
    }
}
