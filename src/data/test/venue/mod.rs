use crate::{
    data::venue::VenueRepository,
    model::venue::SaveVenueParams,
    query::{params::QueryParams, table::Table},
};
use entity::prelude::{ItemStatus, Venue};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod list;
mod update;

fn list_params(raw: &str) -> QueryParams {
    let pairs = url::form_urlencoded::parse(raw.as_bytes()).into_owned();
    QueryParams::from_pairs(pairs, Table::Local.schema())
}

fn save_params(nome: &str, cidade: &str) -> SaveVenueParams {
    SaveVenueParams {
        nome: nome.to_string(),
        descricao: format!("descricao para {nome}"),
        bairro: "Centro".to_string(),
        cidade: cidade.to_string(),
        estado: "RS".to_string(),
        status: 1,
        categorias: serde_json::json!([1, 2]),
        pais: "brasil".to_string(),
    }
}
