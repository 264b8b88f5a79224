use sea_orm::Order;

use crate::{
    query::search::SearchMode,
    validation::schema::{FieldKind, TableSchema},
};

/// Limit applied when the client sends none (or an unusable one).
pub const DEFAULT_QUERY_LIMIT: i64 = 10;
/// Upper bound on client-supplied limits.
pub const MAX_QUERY_LIMIT: i64 = 150;

/// Keys with translator meaning; everything else is matched against columns.
const RESERVED_KEYS: [&str; 8] = [
    "limit",
    "offset",
    "select",
    "orderBy",
    "order",
    "search",
    "search_on",
    "search_mode",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Anything that is not `desc` sorts ascending.
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

/// A coerced filter value, typed by the column's schema kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Int(i64),
    Text(String),
}

impl From<FilterValue> for sea_orm::Value {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::Int(n) => n.into(),
            FilterValue::Text(s) => s.into(),
        }
    }
}

/// One column filter produced by the translator.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Plain equality.
    Eq(String, FilterValue),
    /// Membership in a JSON integer-array column.
    Contains(String, i64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    pub term: String,
    pub columns: Vec<String>,
    pub mode: SearchMode,
}

/// Normalized query parameters, ready for [`super::apply::apply`].
///
/// Translation never fails: malformed or unknown input is dropped and the
/// defaults stand.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    pub limit: i64,
    pub offset: i64,
    pub select: Vec<String>,
    pub order: Vec<(String, SortDirection)>,
    pub search: Option<Search>,
    pub filters: Vec<Filter>,
    /// The single "value is one of" slot; the first array-valued key claims
    /// it and later arrays are ignored.
    pub one_of: Option<(String, Vec<FilterValue>)>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_QUERY_LIMIT,
            offset: 0,
            select: Vec::new(),
            order: Vec::new(),
            search: None,
            filters: Vec::new(),
            one_of: None,
        }
    }
}

impl QueryParams {
    /// Translates decoded query pairs against a table schema.
    ///
    /// Repeated keys become array values. Unknown keys and uncoercible values
    /// are silently ignored.
    pub fn from_pairs<I>(pairs: I, schema: &TableSchema) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut keys: Vec<(String, Vec<String>)> = Vec::new();
        for (key, value) in pairs {
            match keys.iter_mut().find(|(k, _)| *k == key) {
                Some((_, values)) => values.push(value),
                None => keys.push((key, vec![value])),
            }
        }

        let mut params = QueryParams::default();
        let first = |name: &str| -> Option<&str> {
            keys.iter()
                .find(|(k, _)| k == name)
                .map(|(_, values)| values[0].as_str())
        };
        let all = |name: &str| -> &[String] {
            keys.iter()
                .find(|(k, _)| k == name)
                .map(|(_, values)| values.as_slice())
                .unwrap_or(&[])
        };

        if let Some(limit) = first("limit").and_then(|v| v.parse::<i64>().ok()) {
            params.limit = limit;
        }
        if let Some(offset) = first("offset").and_then(|v| v.parse::<i64>().ok()) {
            params.offset = offset;
        }

        if let Some(select) = first("select") {
            params.select = select
                .split(',')
                .filter(|column| !column.is_empty() && schema.has_column(column))
                .map(str::to_string)
                .collect();
        }

        let directions = all("order");
        for (i, column) in all("orderBy").iter().enumerate() {
            if !schema.has_column(column) {
                continue;
            }
            let direction = if directions.len() == 1 {
                SortDirection::parse(&directions[0])
            } else {
                directions
                    .get(i)
                    .map(|d| SortDirection::parse(d))
                    .unwrap_or_default()
            };
            params.order.push((column.clone(), direction));
        }

        if let Some(term) = first("search") {
            let columns: Vec<String> = all("search_on")
                .iter()
                .filter(|column| schema.has_column(column.as_str()))
                .cloned()
                .collect();
            if !columns.is_empty() {
                let mode = first("search_mode")
                    .and_then(|v| v.parse::<i64>().ok())
                    .and_then(SearchMode::from_code)
                    .unwrap_or_default();
                let mut term = term.to_string();
                if mode == SearchMode::Boolean {
                    term.push('*');
                }
                params.search = Some(Search {
                    term,
                    columns,
                    mode,
                });
            }
        }

        for (key, values) in &keys {
            if RESERVED_KEYS.contains(&key.as_str()) {
                continue;
            }
            let Some(kind) = schema.kind_of(key) else {
                continue;
            };

            if values.len() > 1 {
                if params.one_of.is_none() {
                    let coerced: Vec<FilterValue> = values
                        .iter()
                        .filter_map(|v| Self::coerce(kind, v))
                        .collect();
                    if !coerced.is_empty() {
                        params.one_of = Some((key.clone(), coerced));
                    }
                }
                continue;
            }

            let value = &values[0];
            match kind {
                FieldKind::IntArray => {
                    if let Ok(n) = value.parse::<i64>() {
                        params.filters.push(Filter::Contains(key.clone(), n));
                    }
                }
                _ => {
                    if let Some(coerced) = Self::coerce(kind, value) {
                        params.filters.push(Filter::Eq(key.clone(), coerced));
                    }
                }
            }
        }

        params
    }

    fn coerce(kind: FieldKind, value: &str) -> Option<FilterValue> {
        match kind {
            FieldKind::Integer | FieldKind::IntArray => {
                value.parse::<i64>().ok().map(FilterValue::Int)
            }
            FieldKind::Bool => match value {
                "true" | "1" => Some(FilterValue::Int(1)),
                "false" | "0" => Some(FilterValue::Int(0)),
                _ => None,
            },
            FieldKind::Text => Some(FilterValue::Text(value.to_string())),
            FieldKind::Object(_) => None,
        }
    }
}
