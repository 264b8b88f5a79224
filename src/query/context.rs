use std::str::FromStr;

use entity::prelude::ItemStatus;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Select};

use crate::query::{apply::apply, params::QueryParams};

/// Per-table query wrapper.
///
/// Binds one select handle, excludes soft-deleted rows by default, and
/// delegates parameter application to [`apply`]. `build` hands the finished
/// select back for execution.
pub struct TableContext<E: EntityTrait> {
    query: Select<E>,
    ignore_status: Vec<ItemStatus>,
    params: QueryParams,
}

impl<E> TableContext<E>
where
    E: EntityTrait,
    E::Column: FromStr,
{
    pub fn new(query: Select<E>) -> Self {
        Self {
            query,
            ignore_status: ItemStatus::HIDDEN.to_vec(),
            params: QueryParams::default(),
        }
    }

    /// Replaces the status exclusion list. An empty list exposes
    /// soft-deleted rows.
    pub fn ignore_status(mut self, statuses: impl IntoIterator<Item = ItemStatus>) -> Self {
        self.ignore_status = statuses.into_iter().collect();
        self
    }

    pub fn set_parameters(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    pub fn build(self) -> Select<E> {
        let mut query = self.query;

        if !self.ignore_status.is_empty() {
            if let Ok(status) = E::Column::from_str("status") {
                query = query.filter(status.is_not_in(self.ignore_status));
            }
        }

        apply(query, &self.params)
    }
}
