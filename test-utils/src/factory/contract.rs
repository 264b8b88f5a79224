//! Contract factory for creating test contract rows.

use entity::prelude::ItemStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::timestamp;

/// Factory for creating test contracts with customizable fields.
pub struct ContractFactory<'a> {
    db: &'a DatabaseConnection,
    prestador_id: i64,
    produtor_id: i64,
    evento: i64,
    status: ItemStatus,
    criado_em: String,
}

impl<'a> ContractFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            prestador_id: 1,
            produtor_id: 2,
            evento: 1,
            status: ItemStatus::Active,
            criado_em: timestamp(),
        }
    }

    pub fn prestador_id(mut self, prestador_id: i64) -> Self {
        self.prestador_id = prestador_id;
        self
    }

    pub fn produtor_id(mut self, produtor_id: i64) -> Self {
        self.produtor_id = produtor_id;
        self
    }

    pub fn evento(mut self, evento: i64) -> Self {
        self.evento = evento;
        self
    }

    pub fn status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the contract into the database.
    pub async fn build(self) -> Result<entity::contract::Model, DbErr> {
        entity::contract::ActiveModel {
            id: ActiveValue::NotSet,
            prestador_id: ActiveValue::Set(self.prestador_id),
            produtor_id: ActiveValue::Set(self.produtor_id),
            evento: ActiveValue::Set(self.evento),
            status: ActiveValue::Set(self.status),
            criado_em: ActiveValue::Set(self.criado_em),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a contract with default values.
pub async fn create_contract(db: &DatabaseConnection) -> Result<entity::contract::Model, DbErr> {
    ContractFactory::new(db).build().await
}
