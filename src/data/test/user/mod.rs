use crate::{
    data::user::UserRepository,
    query::{params::QueryParams, table::Table},
};
use entity::prelude::{ItemStatus, User};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod list;

fn list_params(raw: &str) -> QueryParams {
    let pairs = url::form_urlencoded::parse(raw.as_bytes()).into_owned();
    QueryParams::from_pairs(pairs, Table::Usuarios.schema())
}
