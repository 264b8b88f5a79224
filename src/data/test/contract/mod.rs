use crate::{
    data::contract::ContractRepository,
    model::contract::SaveContractParams,
    query::{params::QueryParams, table::Table},
};
use entity::prelude::{Contract, ItemStatus};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod list;
mod update;

fn list_params(raw: &str) -> QueryParams {
    let pairs = url::form_urlencoded::parse(raw.as_bytes()).into_owned();
    QueryParams::from_pairs(pairs, Table::Contrato.schema())
}

fn save_params(prestador_id: i64, produtor_id: i64) -> SaveContractParams {
    SaveContractParams {
        prestador_id,
        produtor_id,
        evento: 5,
        status: 1,
        criado_em: "2024-01-01 12:00:00".to_string(),
    }
}
