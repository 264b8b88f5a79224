use entity::prelude::{Category, ItemStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    model::category::SaveCategoryParams,
    query::{context::TableContext, params::QueryParams},
};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists live rows as JSON so a `select` projection survives
    /// serialization untouched.
    pub async fn list(&self, params: QueryParams) -> Result<Vec<serde_json::Value>, DbErr> {
        TableContext::new(Category::find())
            .set_parameters(params)
            .build()
            .into_json()
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<entity::category::Model>, DbErr> {
        Category::find_by_id(id)
            .filter(entity::category::Column::Status.is_not_in(ItemStatus::HIDDEN))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        params: SaveCategoryParams,
        status: ItemStatus,
    ) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            nome: ActiveValue::Set(params.nome),
            status: ActiveValue::Set(status),
            descricao: ActiveValue::Set(params.descricao),
            parente: ActiveValue::Set(params.parente),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Full-body update of a live row. Returns `None` when the row is
    /// missing or already soft-deleted.
    pub async fn update(
        &self,
        id: i64,
        params: SaveCategoryParams,
        status: ItemStatus,
    ) -> Result<Option<entity::category::Model>, DbErr> {
        let Some(category) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::category::ActiveModel = category.into();
        active.nome = ActiveValue::Set(params.nome);
        active.status = ActiveValue::Set(status);
        active.descricao = ActiveValue::Set(params.descricao);
        active.parente = ActiveValue::Set(params.parente);

        Ok(Some(active.update(self.db).await?))
    }

    /// Soft delete: flips the row to `Deleted`. Returns whether a live row
    /// was found.
    pub async fn delete(&self, id: i64) -> Result<bool, DbErr> {
        let Some(category) = self.get_by_id(id).await? else {
            return Ok(false);
        };

        let mut active: entity::category::ActiveModel = category.into();
        active.status = ActiveValue::Set(ItemStatus::Deleted);
        active.update(self.db).await?;

        Ok(true)
    }
}
