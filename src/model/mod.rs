//! Wire models: response DTOs and write-payload params for each resource.
//!
//! Field names follow the API's wire format (serde renames cover the
//! camelCase legacy columns), so DTOs serialize exactly the way rows come
//! out of the store.

pub mod age_bracket;
pub mod api;
pub mod category;
pub mod contract;
pub mod event;
pub mod user;
pub mod venue;

use serde::{Deserialize, Deserializer};

/// Deserializes a boolean that clients may send as `true`/`false` or as the
/// 0/1 surrogate the storage layer uses.
pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrInt {
        Bool(bool),
        Int(i64),
    }

    match BoolOrInt::deserialize(deserializer)? {
        BoolOrInt::Bool(value) => Ok(value),
        BoolOrInt::Int(0) => Ok(false),
        BoolOrInt::Int(1) => Ok(true),
        BoolOrInt::Int(other) => Err(serde::de::Error::custom(format!(
            "expected a boolean or 0/1, got {other}"
        ))),
    }
}
