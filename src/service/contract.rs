use sea_orm::DatabaseConnection;

use crate::{
    data::contract::ContractRepository,
    error::AppError,
    model::contract::{ContractDto, SaveContractParams},
    query::params::QueryParams,
    service::status_from_code,
};

pub struct ContractService<'a> {
    repository: ContractRepository<'a>,
}

impl<'a> ContractService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            repository: ContractRepository::new(db),
        }
    }

    pub async fn list(&self, params: QueryParams) -> Result<Vec<serde_json::Value>, AppError> {
        Ok(self.repository.list(params).await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ContractDto, AppError> {
        self.repository
            .get_by_id(id)
            .await?
            .map(ContractDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Contract {id} not found")))
    }

    pub async fn create(&self, params: SaveContractParams) -> Result<ContractDto, AppError> {
        let status = status_from_code(params.status)?;

        Ok(self.repository.create(params, status).await?.into())
    }

    pub async fn update(
        &self,
        id: i64,
        params: SaveContractParams,
    ) -> Result<ContractDto, AppError> {
        let status = status_from_code(params.status)?;

        self.repository
            .update(id, params, status)
            .await?
            .map(ContractDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Contract {id} not found")))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound(format!("Contract {id} not found")));
        }

        Ok(())
    }
}
