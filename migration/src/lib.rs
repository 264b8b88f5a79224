pub use sea_orm_migration::prelude::*;

mod m20260115_000001_create_categorias_table;
mod m20260115_000002_create_local_table;
mod m20260115_000003_create_faixa_etaria_table;
mod m20260115_000004_create_usuarios_table;
mod m20260115_000005_create_eventos_table;
mod m20260115_000006_create_contrato_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_categorias_table::Migration),
            Box::new(m20260115_000002_create_local_table::Migration),
            Box::new(m20260115_000003_create_faixa_etaria_table::Migration),
            Box::new(m20260115_000004_create_usuarios_table::Migration),
            Box::new(m20260115_000005_create_eventos_table::Migration),
            Box::new(m20260115_000006_create_contrato_table::Migration),
        ]
    }
}
