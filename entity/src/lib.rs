//! SeaORM entity models for the event-management schema.
//!
//! Table and column names follow the wire format of the API (Portuguese
//! resource names, camelCase for a handful of legacy columns).

pub mod age_bracket;
pub mod category;
pub mod contract;
pub mod event;
pub mod prelude;
pub mod status;
pub mod user;
pub mod venue;
