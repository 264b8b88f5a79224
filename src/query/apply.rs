use std::str::FromStr;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select};

use crate::query::{
    params::{Filter, QueryParams, DEFAULT_QUERY_LIMIT, MAX_QUERY_LIMIT},
    search,
};

/// Folds a parameter bag onto a select in fixed order: limit, order,
/// full-text search, equality filters, the one-of filter, offset, column
/// selection.
///
/// Column names resolve through the entity's `Column: FromStr`; anything
/// that fails to resolve is skipped, which keeps client input away from SQL
/// identifiers entirely. A limit outside `1..150` falls back to the default.
pub fn apply<E>(mut query: Select<E>, params: &QueryParams) -> Select<E>
where
    E: EntityTrait,
    E::Column: FromStr,
{
    let limit = if params.limit > 0 && params.limit < MAX_QUERY_LIMIT {
        params.limit
    } else {
        DEFAULT_QUERY_LIMIT
    };
    query = query.limit(limit as u64);

    for (column, direction) in &params.order {
        if let Ok(column) = E::Column::from_str(column) {
            query = query.order_by(column, (*direction).into());
        }
    }

    if let Some(search) = &params.search {
        query = query.filter(search::match_against(
            &search.columns,
            &search.term,
            search.mode,
        ));
    }

    for filter in &params.filters {
        match filter {
            Filter::Eq(column, value) => {
                if let Ok(column) = E::Column::from_str(column) {
                    query = query.filter(column.eq(value.clone()));
                }
            }
            Filter::Contains(column, value) => {
                query = query.filter(search::json_array_contains(column, *value));
            }
        }
    }

    if let Some((column, values)) = &params.one_of {
        if let Ok(column) = E::Column::from_str(column) {
            query = query.filter(column.is_in(values.iter().cloned()));
        }
    }

    if params.offset > 0 {
        query = query.offset(params.offset as u64);
    }

    if !params.select.is_empty() {
        query = query.select_only();
        for column in &params.select {
            if let Ok(column) = E::Column::from_str(column) {
                query = query.column(column);
            }
        }
    }

    query
}
