use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Eventos::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Eventos::Id))
                    .col(string(Eventos::Nome))
                    .col(big_integer(Eventos::Produtor))
                    .col(integer(Eventos::Status))
                    .col(big_integer(Eventos::Local))
                    .col(big_integer(Eventos::FaixaEtaria))
                    .col(json(Eventos::Categorias))
                    .col(string(Eventos::Comeca))
                    .col(string(Eventos::Termina))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Eventos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Eventos {
    Table,
    Id,
    Nome,
    Produtor,
    Status,
    Local,
    #[sea_orm(iden = "faixa_etaria")]
    FaixaEtaria,
    Categorias,
    Comeca,
    Termina,
}
