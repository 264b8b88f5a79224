use sea_orm::DatabaseConnection;

use crate::{
    data::age_bracket::AgeBracketRepository,
    error::AppError,
    model::age_bracket::{AgeBracketDto, SaveAgeBracketParams},
    query::params::QueryParams,
    service::status_from_code,
};

pub struct AgeBracketService<'a> {
    repository: AgeBracketRepository<'a>,
}

impl<'a> AgeBracketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            repository: AgeBracketRepository::new(db),
        }
    }

    pub async fn list(&self, params: QueryParams) -> Result<Vec<serde_json::Value>, AppError> {
        Ok(self.repository.list(params).await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<AgeBracketDto, AppError> {
        self.repository
            .get_by_id(id)
            .await?
            .map(AgeBracketDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Age bracket {id} not found")))
    }

    pub async fn create(&self, params: SaveAgeBracketParams) -> Result<AgeBracketDto, AppError> {
        let status = status_from_code(params.status)?;

        Ok(self.repository.create(params, status).await?.into())
    }

    pub async fn update(
        &self,
        id: i64,
        params: SaveAgeBracketParams,
    ) -> Result<AgeBracketDto, AppError> {
        let status = status_from_code(params.status)?;

        self.repository
            .update(id, params, status)
            .await?
            .map(AgeBracketDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Age bracket {id} not found")))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound(format!("Age bracket {id} not found")));
        }

        Ok(())
    }
}
