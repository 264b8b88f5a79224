use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{SaveUserParams, UserDto},
    query::params::QueryParams,
    service::status_from_code,
};

pub struct UserService<'a> {
    repository: UserRepository<'a>,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            repository: UserRepository::new(db),
        }
    }

    pub async fn list(&self, params: QueryParams) -> Result<Vec<serde_json::Value>, AppError> {
        Ok(self.repository.list(params).await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<UserDto, AppError> {
        self.repository
            .get_by_id(id)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))
    }

    pub async fn create(&self, params: SaveUserParams) -> Result<UserDto, AppError> {
        let status = status_from_code(params.status)?;

        Ok(self.repository.create(params, status).await?.into())
    }

    pub async fn update(&self, id: i64, params: SaveUserParams) -> Result<UserDto, AppError> {
        let status = status_from_code(params.status)?;

        self.repository
            .update(id, params, status)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound(format!("User {id} not found")));
        }

        Ok(())
    }
}
