//! Factories for inserting test rows with sensible defaults.
//!
//! Each factory offers a builder pattern for overriding individual fields
//! and a `create_*` shorthand for tests that only need a row to exist.

pub mod age_bracket;
pub mod category;
pub mod contract;
pub mod event;
pub mod helpers;
pub mod user;
pub mod venue;
