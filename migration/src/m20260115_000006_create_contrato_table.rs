use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contrato::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Contrato::Id))
                    .col(big_integer(Contrato::PrestadorId))
                    .col(big_integer(Contrato::ProdutorId))
                    .col(big_integer(Contrato::Evento))
                    .col(integer(Contrato::Status))
                    .col(string(Contrato::CriadoEm))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contrato::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Contrato {
    Table,
    Id,
    #[sea_orm(iden = "prestadorId")]
    PrestadorId,
    #[sea_orm(iden = "produtorId")]
    ProdutorId,
    Evento,
    Status,
    #[sea_orm(iden = "criadoEm")]
    CriadoEm,
}
