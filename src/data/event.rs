use entity::prelude::{Event, ItemStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    model::event::SaveEventParams,
    query::{context::TableContext, params::QueryParams},
};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, params: QueryParams) -> Result<Vec<serde_json::Value>, DbErr> {
        TableContext::new(Event::find())
            .set_parameters(params)
            .build()
            .into_json()
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<entity::event::Model>, DbErr> {
        Event::find_by_id(id)
            .filter(entity::event::Column::Status.is_not_in(ItemStatus::HIDDEN))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        params: SaveEventParams,
        status: ItemStatus,
    ) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            nome: ActiveValue::Set(params.nome),
            produtor: ActiveValue::Set(params.produtor),
            status: ActiveValue::Set(status),
            local: ActiveValue::Set(params.local),
            faixa_etaria: ActiveValue::Set(params.faixa_etaria),
            categorias: ActiveValue::Set(params.categorias),
            comeca: ActiveValue::Set(params.comeca),
            termina: ActiveValue::Set(params.termina),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i64,
        params: SaveEventParams,
        status: ItemStatus,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        let Some(event) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::event::ActiveModel = event.into();
        active.nome = ActiveValue::Set(params.nome);
        active.produtor = ActiveValue::Set(params.produtor);
        active.status = ActiveValue::Set(status);
        active.local = ActiveValue::Set(params.local);
        active.faixa_etaria = ActiveValue::Set(params.faixa_etaria);
        active.categorias = ActiveValue::Set(params.categorias);
        active.comeca = ActiveValue::Set(params.comeca);
        active.termina = ActiveValue::Set(params.termina);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i64) -> Result<bool, DbErr> {
        let Some(event) = self.get_by_id(id).await? else {
            return Ok(false);
        };

        let mut active: entity::event::ActiveModel = event.into();
        active.status = ActiveValue::Set(ItemStatus::Deleted);
        active.update(self.db).await?;

        Ok(true)
    }
}
