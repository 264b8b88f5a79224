//! User factory for creating test user rows.

use entity::prelude::ItemStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_id, timestamp};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .nome("Fernanda")
///     .produtor(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    nome: String,
    prestador: bool,
    produtor: bool,
    data_nascimento: String,
    status: ItemStatus,
    categorias: serde_json::Value,
    cnpj: String,
    nacionalidade: String,
    genero: String,
}

impl<'a> UserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();

        Self {
            db,
            nome: format!("User {id}"),
            prestador: false,
            produtor: false,
            data_nascimento: timestamp(),
            status: ItemStatus::Active,
            categorias: serde_json::json!([]),
            cnpj: format!("cnpj-{id}"),
            nacionalidade: "brasileiro".to_string(),
            genero: "Masculino".to_string(),
        }
    }

    pub fn nome(mut self, nome: impl Into<String>) -> Self {
        self.nome = nome.into();
        self
    }

    pub fn prestador(mut self, prestador: bool) -> Self {
        self.prestador = prestador;
        self
    }

    pub fn produtor(mut self, produtor: bool) -> Self {
        self.produtor = produtor;
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

    pub fn genero(mut self, genero: impl Into<String>) -> Self {
        self.genero = genero.into();
        self
    }

    /// Builds and inserts the user into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            nome: ActiveValue::Set(self.nome),
            prestador: ActiveValue::Set(self.prestador),
            produtor: ActiveValue::Set(self.produtor),
            data_nascimento: ActiveValue::Set(self.data_nascimento),
            status: ActiveValue::Set(self.status),
            categorias: ActiveValue::Set(self.categorias),
            cnpj: ActiveValue::Set(self.cnpj),
            nacionalidade: ActiveValue::Set(self.nacionalidade),
            genero: ActiveValue::Set(self.genero),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
