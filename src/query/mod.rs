//! Query-context layer.
//!
//! Turns raw HTTP query strings into validated, parameterized SQL in three
//! steps: [`params`] translates the decoded key/value pairs into a normalized
//! parameter bag, [`apply`] folds that bag onto a SeaORM `Select` in a fixed
//! order, and [`context`] wraps the whole thing per table with the default
//! soft-delete exclusion. [`table`] is the closed registry of queryable
//! tables; [`search`] renders the full-text and JSON-membership fragments.
//!
//! Column identifiers only ever come from the static schemas; anything the
//! client sends that does not resolve against the schema is silently dropped
//! before SQL generation.

pub mod apply;
pub mod context;
pub mod params;
pub mod search;
pub mod table;
