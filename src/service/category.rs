use sea_orm::DatabaseConnection;

use crate::{
    data::category::CategoryRepository,
    error::AppError,
    model::category::{CategoryDto, SaveCategoryParams},
    query::params::QueryParams,
    service::status_from_code,
};

pub struct CategoryService<'a> {
    repository: CategoryRepository<'a>,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            repository: CategoryRepository::new(db),
        }
    }

    pub async fn list(&self, params: QueryParams) -> Result<Vec<serde_json::Value>, AppError> {
        Ok(self.repository.list(params).await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<CategoryDto, AppError> {
        self.repository
            .get_by_id(id)
            .await?
            .map(CategoryDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Category {id} not found")))
    }

    pub async fn create(&self, params: SaveCategoryParams) -> Result<CategoryDto, AppError> {
        let status = status_from_code(params.status)?;

        Ok(self.repository.create(params, status).await?.into())
    }

    pub async fn update(
        &self,
        id: i64,
        params: SaveCategoryParams,
    ) -> Result<CategoryDto, AppError> {
        let status = status_from_code(params.status)?;

        self.repository
            .update(id, params, status)
            .await?
            .map(CategoryDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Category {id} not found")))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound(format!("Category {id} not found")));
        }

        Ok(())
    }
}
