use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Local::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Local::Id))
                    .col(string(Local::Nome))
                    .col(string(Local::Descricao))
                    .col(string(Local::Bairro))
                    .col(string(Local::Cidade))
                    .col(string(Local::Estado))
                    .col(integer(Local::Status))
                    .col(json(Local::Categorias))
                    .col(string(Local::Pais))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Local::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Local {
    Table,
    Id,
    Nome,
    Descricao,
    Bairro,
    Cidade,
    Estado,
    Status,
    Categorias,
    Pais,
}
