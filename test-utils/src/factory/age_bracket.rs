//! Age bracket factory for creating test age bracket rows.

use entity::prelude::ItemStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test age brackets with customizable fields.
pub struct AgeBracketFactory<'a> {
    db: &'a DatabaseConnection,
    nome: String,
    min_idade: i64,
    status: ItemStatus,
    max_idade: Option<i64>,
}

impl<'a> AgeBracketFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();

        Self {
            db,
            nome: format!("Bracket {id}"),
            min_idade: 18,
            status: ItemStatus::Active,
            max_idade: Some(60),
        }
    }

    pub fn nome(mut self, nome: impl Into<String>) -> Self {
        self.nome = nome.into();
        self
    }

    pub fn min_idade(mut self, min_idade: i64) -> Self {
        self.min_idade = min_idade;
        self
    }

    pub fn max_idade(mut self, max_idade: Option<i64>) -> Self {
        self.max_idade = max_idade;
        self
    }

    pub fn status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the age bracket into the database.
    pub async fn build(self) -> Result<entity::age_bracket::Model, DbErr> {
        entity::age_bracket::ActiveModel {
            id: ActiveValue::NotSet,
            nome: ActiveValue::Set(self.nome),
            min_idade: ActiveValue::Set(self.min_idade),
            status: ActiveValue::Set(self.status),
            max_idade: ActiveValue::Set(self.max_idade),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an age bracket with default values.
pub async fn create_age_bracket(
    db: &DatabaseConnection,
) -> Result<entity::age_bracket::Model, DbErr> {
    AgeBracketFactory::new(db).build().await
}
