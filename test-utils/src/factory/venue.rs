//! Venue factory for creating test venue rows.

use entity::prelude::ItemStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test venues with customizable fields.
pub struct VenueFactory<'a> {
    db: &'a DatabaseConnection,
    nome: String,
    descricao: String,
    bairro: String,
    cidade: String,
    estado: String,
    status: ItemStatus,
    categorias: serde_json::Value,
    pais: String,
}

impl<'a> VenueFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();

        Self {
            db,
            nome: format!("Venue {id}"),
            descricao: format!("descricao para Venue {id}"),
            bairro: String::new(),
            cidade: "Caxias Do Sul".to_string(),
            estado: "RS".to_string(),
            status: ItemStatus::Active,
            categorias: serde_json::json!([1]),
            pais: "brasil".to_string(),
        }
    }

    pub fn nome(mut self, nome: impl Into<String>) -> Self {
        self.nome = nome.into();
        self
    }

    pub fn cidade(mut self, cidade: impl Into<String>) -> Self {
        self.cidade = cidade.into();
        self
    }

    pub fn status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn categorias(mut self, categorias: serde_json::Value) -> Self {
        self.categorias = categorias;
        self
    }

    /// Builds and inserts the venue into the database.
    pub async fn build(self) -> Result<entity::venue::Model, DbErr> {
        entity::venue::ActiveModel {
            id: ActiveValue::NotSet,
            nome: ActiveValue::Set(self.nome),
            descricao: ActiveValue::Set(self.descricao),
            bairro: ActiveValue::Set(self.bairro),
            cidade: ActiveValue::Set(self.cidade),
            estado: ActiveValue::Set(self.estado),
            status: ActiveValue::Set(self.status),
            categorias: ActiveValue::Set(self.categorias),
            pais: ActiveValue::Set(self.pais),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a venue with default values.
pub async fn create_venue(db: &DatabaseConnection) -> Result<entity::venue::Model, DbErr> {
    VenueFactory::new(db).build().await
}
