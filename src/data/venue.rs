use entity::prelude::{ItemStatus, Venue};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    model::venue::SaveVenueParams,
    query::{context::TableContext, params::QueryParams},
};

pub struct VenueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VenueRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, params: QueryParams) -> Result<Vec<serde_json::Value>, DbErr> {
        TableContext::new(Venue::find())
            .set_parameters(params)
            .build()
            .into_json()
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<entity::venue::Model>, DbErr> {
        Venue::find_by_id(id)
            .filter(entity::venue::Column::Status.is_not_in(ItemStatus::HIDDEN))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        params: SaveVenueParams,
        status: ItemStatus,
    ) -> Result<entity::venue::Model, DbErr> {
        entity::venue::ActiveModel {
            nome: ActiveValue::Set(params.nome),
            descricao: ActiveValue::Set(params.descricao),
            bairro: ActiveValue::Set(params.bairro),
            cidade: ActiveValue::Set(params.cidade),
            estado: ActiveValue::Set(params.estado),
            status: ActiveValue::Set(status),
            categorias: ActiveValue::Set(params.categorias),
            pais: ActiveValue::Set(params.pais),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i64,
        params: SaveVenueParams,
        status: ItemStatus,
    ) -> Result<Option<entity::venue::Model>, DbErr> {
        let Some(venue) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::venue::ActiveModel = venue.into();
        active.nome = ActiveValue::Set(params.nome);
        active.descricao = ActiveValue::Set(params.descricao);
        active.bairro = ActiveValue::Set(params.bairro);
        active.cidade = ActiveValue::Set(params.cidade);
        active.estado = ActiveValue::Set(params.estado);
        active.status = ActiveValue::Set(status);
        active.categorias = ActiveValue::Set(params.categorias);
        active.pais = ActiveValue::Set(params.pais);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i64) -> Result<bool, DbErr> {
        let Some(venue) = self.get_by_id(id).await? else {
            return Ok(false);
        };

        let mut active: entity::venue::ActiveModel = venue.into();
        active.status = ActiveValue::Set(ItemStatus::Deleted);
        active.update(self.db).await?;

        Ok(true)
    }
}
