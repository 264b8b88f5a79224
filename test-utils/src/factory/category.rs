//! Category factory for creating test category rows.

use entity::prelude::ItemStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test categories with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::category::CategoryFactory;
///
/// let category = CategoryFactory::new(&db)
///     .nome("cardapio")
///     .parente(1)
///     .build()
///     .await?;
/// ```
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    nome: String,
    status: ItemStatus,
    descricao: String,
    parente: i64,
}

impl<'a> CategoryFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();

        Self {
            db,
            nome: format!("Category {id}"),
            status: ItemStatus::Active,
            descricao: format!("descricao para Category {id}"),
            parente: -1,
        }
    }

    pub fn nome(mut self, nome: impl Into<String>) -> Self {
        self.nome = nome.into();
        self
    }

    pub fn status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn descricao(mut self, descricao: impl Into<String>) -> Self {
        self.descricao = descricao.into();
        self
    }

    pub fn parente(mut self, parente: i64) -> Self {
        self.parente = parente;
        self
    }

    /// Builds and inserts the category into the database.
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            id: ActiveValue::NotSet,
            nome: ActiveValue::Set(self.nome),
            status: ActiveValue::Set(self.status),
            descricao: ActiveValue::Set(self.descricao),
            parente: ActiveValue::Set(self.parente),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}
