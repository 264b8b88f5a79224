use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FaixaEtaria::Table)
                    .if_not_exists()
                    .col(big_pk_auto(FaixaEtaria::Id))
                    .col(string(FaixaEtaria::Nome))
                    .col(big_integer(FaixaEtaria::MinIdade))
                    .col(integer(FaixaEtaria::Status))
                    .col(big_integer_null(FaixaEtaria::MaxIdade))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FaixaEtaria::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FaixaEtaria {
    #[sea_orm(iden = "faixa_etaria")]
    Table,
    Id,
    Nome,
    #[sea_orm(iden = "minIdade")]
    MinIdade,
    Status,
    #[sea_orm(iden = "maxIdade")]
    MaxIdade,
}
