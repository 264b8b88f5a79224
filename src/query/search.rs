use sea_orm::sea_query::{Expr, SimpleExpr};

/// Full-text search modes, by wire code.
///
/// The default is boolean mode, which also gets a `*` wildcard appended to
/// the term by the parameter translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    NaturalLanguage,
    NaturalLanguageWithQuery,
    #[default]
    Boolean,
    WithQueryExpansion,
}

impl SearchMode {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(SearchMode::NaturalLanguage),
            2 => Some(SearchMode::NaturalLanguageWithQuery),
            3 => Some(SearchMode::Boolean),
            4 => Some(SearchMode::WithQueryExpansion),
            _ => None,
        }
    }

    /// SQL modifier text appended after the bound term.
    pub fn modifier(self) -> &'static str {
        match self {
            SearchMode::NaturalLanguage => "in natural language mode",
            SearchMode::NaturalLanguageWithQuery => {
                "in natural language mode with query expansion"
            }
            SearchMode::Boolean => "in boolean mode",
            SearchMode::WithQueryExpansion => "with query expansion",
        }
    }
}

/// Renders the single `MATCH(cols) AGAINST (? <mode>)` fragment used for
/// full-text search. The term is always bound; columns must come from a
/// table schema, never from client input.
pub fn match_against(columns: &[String], term: &str, mode: SearchMode) -> SimpleExpr {
    let fragment = format!(
        "match({}) against (? {})",
        columns.join(", "),
        mode.modifier()
    );
    Expr::cust_with_values(fragment, [term.to_string()])
}

/// Renders a membership probe into a JSON integer-array column. The value is
/// bound; the column identifier must come from a table schema.
pub fn json_array_contains(column: &str, value: i64) -> SimpleExpr {
    let fragment =
        format!("exists (select 1 from json_each(\"{column}\") where json_each.value = ?)");
    Expr::cust_with_values(fragment, [value])
}
