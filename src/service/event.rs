use sea_orm::DatabaseConnection;

use crate::{
    data::event::EventRepository,
    error::AppError,
    model::event::{EventDto, SaveEventParams},
    query::params::QueryParams,
    service::status_from_code,
};

pub struct EventService<'a> {
    repository: EventRepository<'a>,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            repository: EventRepository::new(db),
        }
    }

    pub async fn list(&self, params: QueryParams) -> Result<Vec<serde_json::Value>, AppError> {
        Ok(self.repository.list(params).await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<EventDto, AppError> {
        self.repository
            .get_by_id(id)
            .await?
            .map(EventDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Event {id} not found")))
    }

    pub async fn create(&self, params: SaveEventParams) -> Result<EventDto, AppError> {
        let status = status_from_code(params.status)?;

        Ok(self.repository.create(params, status).await?.into())
    }

    pub async fn update(&self, id: i64, params: SaveEventParams) -> Result<EventDto, AppError> {
        let status = status_from_code(params.status)?;

        self.repository
            .update(id, params, status)
            .await?
            .map(EventDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Event {id} not found")))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound(format!("Event {id} not found")));
        }

        Ok(())
    }
}
