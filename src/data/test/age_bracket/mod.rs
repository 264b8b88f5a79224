use crate::{
    data::age_bracket::AgeBracketRepository,
    model::age_bracket::SaveAgeBracketParams,
    query::{params::QueryParams, table::Table},
};
use entity::prelude::{AgeBracket, ItemStatus};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod list;
mod update;

fn list_params(raw: &str) -> QueryParams {
    let pairs = url::form_urlencoded::parse(raw.as_bytes()).into_owned();
    QueryParams::from_pairs(pairs, Table::FaixaEtaria.schema())
}

fn save_params(nome: &str, min_idade: i64, max_idade: i64) -> SaveAgeBracketParams {
    SaveAgeBracketParams {
        nome: nome.to_string(),
        min_idade,
        status: 1,
        max_idade,
    }
}
