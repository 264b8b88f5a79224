//! Static field schemas for the six tables.
//!
//! A schema is the single source of truth for which columns exist and what
//! primitive kind each carries. The query layer uses it to discard unknown
//! identifiers before anything reaches SQL; the validators use it to check
//! write payloads.

/// Primitive kind of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Integer-valued column. Query filter values on these columns are
    /// coerced numerically.
    Integer,
    /// Text column, including the `YYYY-MM-DD HH:MM:SS` timestamp strings.
    Text,
    /// Boolean column. Payload validation tolerates a 0/1 surrogate.
    Bool,
    /// JSON array of integers. Equality filters on these columns mean
    /// membership in the stored array.
    IntArray,
    /// Nested object validated against its own schema.
    Object(&'static TableSchema),
}

/// Field table for one entity: wire name plus kind, in column order.
#[derive(Debug, PartialEq, Eq)]
pub struct TableSchema {
    pub fields: &'static [(&'static str, FieldKind)],
}

impl TableSchema {
    pub fn kind_of(&self, key: &str) -> Option<FieldKind> {
        self.fields
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, kind)| *kind)
    }

    pub fn has_column(&self, key: &str) -> bool {
        self.kind_of(key).is_some()
    }

    /// Fields expected in a write payload. The primary key is generated by
    /// the store and never required from clients.
    pub fn payload_fields(&self) -> impl Iterator<Item = &(&'static str, FieldKind)> {
        self.fields.iter().filter(|(name, _)| *name != "id")
    }
}
