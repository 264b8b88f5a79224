//! Database repository layer for all domain entities.
//!
//! Repositories own every SeaORM call. Lists run through the query context
//! (soft-delete exclusion plus client parameters) and come back as JSON rows
//! so column selection survives serialization; point lookups, inserts, and
//! the status-flip soft delete work on typed models.

pub mod age_bracket;
pub mod category;
pub mod contract;
pub mod event;
pub mod user;
pub mod venue;

#[cfg(test)]
mod test;
