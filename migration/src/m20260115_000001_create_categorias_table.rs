use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Categorias::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Categorias::Id))
                    .col(string(Categorias::Nome))
                    .col(integer(Categorias::Status))
                    .col(string(Categorias::Descricao))
                    .col(big_integer(Categorias::Parente))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Categorias::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Categorias {
    Table,
    Id,
    Nome,
    Status,
    Descricao,
    Parente,
}
