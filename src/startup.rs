use sea_orm::{ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, sea_query::OnConflict};

use entity::prelude::ItemStatus;

use crate::{config::Config, error::AppError};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up-to-date before the application touches the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Installs a panic hook that records the panic to a timestamped crash file
/// before the default hook runs.
pub fn install_crash_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |info| {
        let path = format!("crash_{}.log", chrono::Utc::now().timestamp_millis());
        let _ = std::fs::write(&path, info.to_string());
        tracing::error!("panic recorded in {path}");

        default_hook(info);
    }));
}

fn sql_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Seeds the baseline rows every deployment starts from. Inserts are upserts
/// keyed on id, so restarting against an existing database resets the seed
/// rows without duplicating them.
pub async fn seed_database(db: &DatabaseConnection) -> Result<(), AppError> {
    seed_categories(db).await?;
    seed_venues(db).await?;
    seed_age_brackets(db).await?;
    seed_users(db).await?;
    seed_events(db).await?;
    seed_contracts(db).await?;

    Ok(())
}

async fn seed_categories(db: &DatabaseConnection) -> Result<(), DbErr> {
    use entity::category::{ActiveModel, Column, Entity};

    let rows = [
        (1, "Alimentacao", -1, "descricao para alimentacao"),
        (2, "Entreterimento", -1, "descricao para Entreterimento"),
        (3, "Infraestrutura", -1, "descricao para Infraestrutura"),
        (4, "cardapio", 1, "descricao para cardapio"),
        (5, "restricao", 1, "descricao para restricao"),
        (6, "artes_cenicas", 2, "descricao para artes_cenicas"),
        (7, "musica", 2, "descricao para musica"),
        (8, "danca", 2, "descricao para danca"),
        (9, "atendimento", 3, "descricao para atendimento"),
        (10, "cenario", 3, "descricao para cenario"),
        (11, "limpeza", 3, "descricao para limpeza"),
        (12, "som", 3, "descricao para som"),
    ];

    let models = rows.map(|(id, nome, parente, descricao)| ActiveModel {
        id: Set(id),
        nome: Set(nome.to_string()),
        status: Set(ItemStatus::Active),
        descricao: Set(descricao.to_string()),
        parente: Set(parente),
    });

    Entity::insert_many(models)
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_columns([
                    Column::Nome,
                    Column::Status,
                    Column::Descricao,
                    Column::Parente,
                ])
                .to_owned(),
        )
        .exec(db)
        .await?;

    Ok(())
}

async fn seed_venues(db: &DatabaseConnection) -> Result<(), DbErr> {
    use entity::venue::{ActiveModel, Column, Entity};

    let rows = [
        (1, "restaurante tulipa", "tulipa restaurante"),
        (2, "xis do tulipa", "tulipa xis"),
    ];

    let models = rows.map(|(id, nome, descricao)| ActiveModel {
        id: Set(id),
        nome: Set(nome.to_string()),
        descricao: Set(descricao.to_string()),
        bairro: Set(String::new()),
        cidade: Set("Caxias Do Sul".to_string()),
        estado: Set("RS".to_string()),
        status: Set(ItemStatus::Active),
        categorias: Set(serde_json::json!([1])),
        pais: Set("brasil".to_string()),
    });

    Entity::insert_many(models)
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_columns([
                    Column::Nome,
                    Column::Descricao,
                    Column::Bairro,
                    Column::Cidade,
                    Column::Estado,
                    Column::Status,
                    Column::Categorias,
                    Column::Pais,
                ])
                .to_owned(),
        )
        .exec(db)
        .await?;

    Ok(())
}

async fn seed_age_brackets(db: &DatabaseConnection) -> Result<(), DbErr> {
    use entity::age_bracket::{ActiveModel, Column, Entity};

    let rows = [
        (1, "Adulto", 18, Some(60)),
        (2, "Idoso", 60, None),
        (3, "Jovem", 12, Some(17)),
        (4, "Infantil", 0, Some(12)),
    ];

    let models = rows.map(|(id, nome, min_idade, max_idade)| ActiveModel {
        id: Set(id),
        nome: Set(nome.to_string()),
        min_idade: Set(min_idade),
        status: Set(ItemStatus::Active),
        max_idade: Set(max_idade),
    });

    Entity::insert_many(models)
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_columns([
                    Column::Nome,
                    Column::MinIdade,
                    Column::Status,
                    Column::MaxIdade,
                ])
                .to_owned(),
        )
        .exec(db)
        .await?;

    Ok(())
}

async fn seed_users(db: &DatabaseConnection) -> Result<(), DbErr> {
    use entity::user::{ActiveModel, Column, Entity};

    let rows = [
        (1, "rodrigo", true, false, "Masculino"),
        (2, "Fernanda", false, true, "Feminino"),
    ];

    let models = rows.map(|(id, nome, prestador, produtor, genero)| ActiveModel {
        id: Set(id),
        nome: Set(nome.to_string()),
        prestador: Set(prestador),
        produtor: Set(produtor),
        data_nascimento: Set(sql_timestamp()),
        status: Set(ItemStatus::Active),
        categorias: Set(serde_json::json!([1])),
        cnpj: Set("0890fd80s".to_string()),
        nacionalidade: Set("brasileiro".to_string()),
        genero: Set(genero.to_string()),
    });

    Entity::insert_many(models)
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_columns([
                    Column::Nome,
                    Column::Prestador,
                    Column::Produtor,
                    Column::DataNascimento,
                    Column::Status,
                    Column::Categorias,
                    Column::Cnpj,
                    Column::Nacionalidade,
                    Column::Genero,
                ])
                .to_owned(),
        )
        .exec(db)
        .await?;

    Ok(())
}

async fn seed_events(db: &DatabaseConnection) -> Result<(), DbErr> {
    use entity::event::{ActiveModel, Column, Entity};

    let model = ActiveModel {
        id: Set(1),
        nome: Set("this namne".to_string()),
        produtor: Set(1),
        status: Set(ItemStatus::Active),
        local: Set(1),
        faixa_etaria: Set(1),
        categorias: Set(serde_json::json!([1])),
        comeca: Set(sql_timestamp()),
        termina: Set(sql_timestamp()),
    };

    Entity::insert_many([model])
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_columns([
                    Column::Nome,
                    Column::Produtor,
                    Column::Status,
                    Column::Local,
                    Column::FaixaEtaria,
                    Column::Categorias,
                    Column::Comeca,
                    Column::Termina,
                ])
                .to_owned(),
        )
        .exec(db)
        .await?;

    Ok(())
}

async fn seed_contracts(db: &DatabaseConnection) -> Result<(), DbErr> {
    use entity::contract::{ActiveModel, Column, Entity};

    let model = ActiveModel {
        id: Set(1),
        prestador_id: Set(1),
        produtor_id: Set(2),
        evento: Set(1),
        status: Set(ItemStatus::Active),
        criado_em: Set(sql_timestamp()),
    };

    Entity::insert_many([model])
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_columns([
                    Column::PrestadorId,
                    Column::ProdutorId,
                    Column::Evento,
                    Column::Status,
                    Column::CriadoEm,
                ])
                .to_owned(),
        )
        .exec(db)
        .await?;

    Ok(())
}
