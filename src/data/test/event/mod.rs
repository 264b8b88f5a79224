use crate::{
    data::event::EventRepository,
    model::event::SaveEventParams,
    query::{params::QueryParams, table::Table},
};
use entity::prelude::{Event, ItemStatus};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod list;
mod update;

fn list_params(raw: &str) -> QueryParams {
    let pairs = url::form_urlencoded::parse(raw.as_bytes()).into_owned();
    QueryParams::from_pairs(pairs, Table::Eventos.schema())
}

fn save_params(nome: &str, produtor: i64) -> SaveEventParams {
    SaveEventParams {
        nome: nome.to_string(),
        produtor,
        status: 1,
        local: 3,
        faixa_etaria: 2,
        categorias: serde_json::json!([1]),
        comeca: "2024-06-01 20:00:00".to_string(),
        termina: "2024-06-02 01:00:00".to_string(),
    }
}
