//! Event factory for creating test event rows.

use entity::prelude::ItemStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_id, timestamp};

/// Factory for creating test events with customizable fields.
///
/// Rows reference producers, venues, and age brackets by id without foreign
/// key enforcement, so tests may point at ids that only exist when they need
/// them to.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    nome: String,
    produtor: i64,
    status: ItemStatus,
    local: i64,
    faixa_etaria: i64,
    categorias: serde_json::Value,
    comeca: String,
    termina: String,
}

impl<'a> EventFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();

        Self {
            db,
            nome: format!("Event {id}"),
            produtor: 1,
            status: ItemStatus::Active,
            local: 1,
            faixa_etaria: 1,
            categorias: serde_json::json!([1]),
            comeca: timestamp(),
            termina: timestamp(),
        }
    }

    pub fn nome(mut self, nome: impl Into<String>) -> Self {
        self.nome = nome.into();
        self
    }

    pub fn produtor(mut self, produtor: i64) -> Self {
        self.produtor = produtor;
        self
    }

    pub fn status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn local(mut self, local: i64) -> Self {
        self.local = local;
        self
    }

    pub fn faixa_etaria(mut self, faixa_etaria: i64) -> Self {
        self.faixa_etaria = faixa_etaria;
        self
    }

    pub fn categorias(mut self, categorias: serde_json::Value) -> Self {
        self.categorias = categorias;
        self
    }

    /// Builds and inserts the event into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            id: ActiveValue::NotSet,
            nome: ActiveValue::Set(self.nome),
            produtor: ActiveValue::Set(self.produtor),
            status: ActiveValue::Set(self.status),
            local: ActiveValue::Set(self.local),
            faixa_etaria: ActiveValue::Set(self.faixa_etaria),
            categorias: ActiveValue::Set(self.categorias),
            comeca: ActiveValue::Set(self.comeca),
            termina: ActiveValue::Set(self.termina),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values.
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}
