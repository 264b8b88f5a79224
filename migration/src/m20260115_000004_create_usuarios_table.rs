use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Usuarios::Id))
                    .col(string(Usuarios::Nome))
                    .col(boolean(Usuarios::Prestador))
                    .col(boolean(Usuarios::Produtor))
                    .col(string(Usuarios::DataNascimento))
                    .col(integer(Usuarios::Status))
                    .col(json(Usuarios::Categorias))
                    .col(string(Usuarios::Cnpj))
                    .col(string(Usuarios::Nacionalidade))
                    .col(string(Usuarios::Genero))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Usuarios {
    Table,
    Id,
    Nome,
    Prestador,
    Produtor,
    DataNascimento,
    Status,
    Categorias,
    Cnpj,
    Nacionalidade,
    Genero,
}
