//! The `Resource` trait ties an entity struct to its table layout, its key
//! type and the subset of fields an update may overwrite. Everything generic
//! (SQL generation, schema sync, the HTTP controller) is written against it.

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use sqlx::{postgres::PgRow, FromRow};
use std::fmt::Display;

/// A non-key column and its DDL definition (type plus constraints).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub definition: &'static str,
}

impl Column {
    pub const fn new(name: &'static str, definition: &'static str) -> Self {
        Self { name, definition }
    }
}

/// The primary key column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyColumn {
    pub name: &'static str,
    pub definition: &'static str,
    /// When true the store assigns the key on insert and any client value is ignored.
    pub store_assigned: bool,
}

impl KeyColumn {
    /// Surrogate `id BIGSERIAL` key.
    pub const fn serial(name: &'static str) -> Self {
        Self {
            name,
            definition: "BIGSERIAL PRIMARY KEY",
            store_assigned: true,
        }
    }

    /// Natural key supplied by the client.
    pub const fn natural(name: &'static str, definition: &'static str) -> Self {
        Self {
            name,
            definition,
            store_assigned: false,
        }
    }
}

/// A typed value ready to be bound as a query parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Int(i32),
    NullableInt(Option<i32>),
    BigInt(i64),
    Text(String),
    NullableText(Option<String>),
    Date(NaiveDate),
}

/// Serde helper for store-assigned ids. An absent or `null` id reads as 0;
/// whatever the client sent is left out of inserts and updates anyway.
pub fn ignore_client_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

/// Key types usable in a resource path (`/classes/:key`).
pub trait ResourceKey: Display + Send + Sync + Sized + 'static {
    /// Parse a raw path segment. `None` means no row can have this key.
    fn parse_key(raw: &str) -> Option<Self>;

    fn to_value(&self) -> SqlValue;
}

impl ResourceKey for i64 {
    fn parse_key(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn to_value(&self) -> SqlValue {
        SqlValue::BigInt(*self)
    }
}

impl ResourceKey for String {
    fn parse_key(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }

    fn to_value(&self) -> SqlValue {
        SqlValue::Text(self.clone())
    }
}

pub trait Resource:
    Serialize + DeserializeOwned + for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin + 'static
{
    type Key: ResourceKey;

    /// Human readable name used in log lines and error messages.
    const NAME: &'static str;
    const TABLE: &'static str;
    /// Path segment under the API prefix, e.g. `lesson-logs`.
    const PATH: &'static str;
    const KEY: KeyColumn;
    /// Non-key columns, in the same order as `field_values`.
    const FIELDS: &'static [Column];

    fn key(&self) -> Self::Key;

    fn field_values(&self) -> Vec<SqlValue>;

    /// Copy the updatable fields of `input` onto `self`. The key is never touched.
    fn apply_update(&mut self, input: Self);

    /// Columns written by an insert, in binding order.
    fn insert_columns() -> Vec<&'static str> {
        let key = (!Self::KEY.store_assigned).then_some(Self::KEY.name);
        key.into_iter()
            .chain(Self::FIELDS.iter().map(|c| c.name))
            .collect()
    }

    /// Values bound by an insert, matching `insert_columns`.
    fn insert_values(&self) -> Vec<SqlValue> {
        let mut values = Vec::with_capacity(Self::FIELDS.len() + 1);
        if !Self::KEY.store_assigned {
            values.push(self.key().to_value());
        }
        values.extend(self.field_values());
        values
    }
}

/// Visits every registered resource type; see `models::visit_all`.
pub trait ResourceVisitor {
    fn visit<R: Resource>(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_keys_reject_garbage() {
        assert_eq!(i64::parse_key("42"), Some(42));
        assert_eq!(i64::parse_key("abc"), None);
        assert_eq!(i64::parse_key(""), None);
        assert_eq!(i64::parse_key("4.5"), None);
    }

    #[test]
    fn code_keys_accept_anything() {
        assert_eq!(String::parse_key("P"), Some("P".to_string()));
        assert_eq!(
            String::parse_key("P").map(|k| k.to_value()),
            Some(SqlValue::Text("P".to_string()))
        );
    }
}
