use entity::prelude::{ItemStatus, User};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    model::user::SaveUserParams,
    query::{context::TableContext, params::QueryParams},
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, params: QueryParams) -> Result<Vec<serde_json::Value>, DbErr> {
        TableContext::new(User::find())
            .set_parameters(params)
            .build()
            .into_json()
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<entity::user::Model>, DbErr> {
        User::find_by_id(id)
            .filter(entity::user::Column::Status.is_not_in(ItemStatus::HIDDEN))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        params: SaveUserParams,
        status: ItemStatus,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            nome: ActiveValue::Set(params.nome),
            prestador: ActiveValue::Set(params.prestador),
            produtor: ActiveValue::Set(params.produtor),
            data_nascimento: ActiveValue::Set(params.data_nascimento),
            status: ActiveValue::Set(status),
            categorias: ActiveValue::Set(params.categorias),
            cnpj: ActiveValue::Set(params.cnpj),
            nacionalidade: ActiveValue::Set(params.nacionalidade),
            genero: ActiveValue::Set(params.genero),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i64,
        params: SaveUserParams,
        status: ItemStatus,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();
        active.nome = ActiveValue::Set(params.nome);
        active.prestador = ActiveValue::Set(params.prestador);
        active.produtor = ActiveValue::Set(params.produtor);
        active.data_nascimento = ActiveValue::Set(params.data_nascimento);
        active.status = ActiveValue::Set(status);
        active.categorias = ActiveValue::Set(params.categorias);
        active.cnpj = ActiveValue::Set(params.cnpj);
        active.nacionalidade = ActiveValue::Set(params.nacionalidade);
        active.genero = ActiveValue::Set(params.genero);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i64) -> Result<bool, DbErr> {
        let Some(user) = self.get_by_id(id).await? else {
            return Ok(false);
        };

        let mut active: entity::user::ActiveModel = user.into();
        active.status = ActiveValue::Set(ItemStatus::Deleted);
        active.update(self.db).await?;

        Ok(true)
    }
}
