use sea_orm::DatabaseConnection;

use crate::{
    data::venue::VenueRepository,
    error::AppError,
    model::venue::{SaveVenueParams, VenueDto},
    query::params::QueryParams,
    service::status_from_code,
};

pub struct VenueService<'a> {
    repository: VenueRepository<'a>,
}

impl<'a> VenueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            repository: VenueRepository::new(db),
        }
    }

    pub async fn list(&self, params: QueryParams) -> Result<Vec<serde_json::Value>, AppError> {
        Ok(self.repository.list(params).await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<VenueDto, AppError> {
        self.repository
            .get_by_id(id)
            .await?
            .map(VenueDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Venue {id} not found")))
    }

    pub async fn create(&self, params: SaveVenueParams) -> Result<VenueDto, AppError> {
        let status = status_from_code(params.status)?;

        Ok(self.repository.create(params, status).await?.into())
    }

    pub async fn update(&self, id: i64, params: SaveVenueParams) -> Result<VenueDto, AppError> {
        let status = status_from_code(params.status)?;

        self.repository
            .update(id, params, status)
            .await?
            .map(VenueDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Venue {id} not found")))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound(format!("Venue {id} not found")));
        }

        Ok(())
    }
}
