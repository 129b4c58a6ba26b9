use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{FromRow, Postgres};

use crate::database::resource::{Resource, SqlValue};

/// Builds the SQL statements a resource needs. Identifiers come from the
/// resource's compile-time column list and are always quoted; values are
/// always bound as parameters.
pub struct QueryBuilder<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Resource> QueryBuilder<T> {
    pub fn select_all() -> String {
        format!("SELECT * FROM {}", quote_identifier(T::TABLE))
    }

    pub fn select_by_key() -> String {
        format!(
            "SELECT * FROM {} WHERE {} = $1",
            quote_identifier(T::TABLE),
            quote_identifier(T::KEY.name)
        )
    }

    pub fn insert() -> String {
        let columns = T::insert_columns();
        let names = columns
            .iter()
            .map(|c| quote_identifier(c))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=columns.len())
            .map(|i| format!("${}", i))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
            quote_identifier(T::TABLE),
            names,
            placeholders
        )
    }

    /// `UPDATE` of every non-key column; the key is bound last.
    pub fn update() -> String {
        let assignments = T::FIELDS
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{} = ${}", quote_identifier(c.name), i + 1))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "UPDATE {} SET {} WHERE {} = ${} RETURNING *",
            quote_identifier(T::TABLE),
            assignments,
            quote_identifier(T::KEY.name),
            T::FIELDS.len() + 1
        )
    }

    pub fn delete() -> String {
        format!(
            "DELETE FROM {} WHERE {} = $1",
            quote_identifier(T::TABLE),
            quote_identifier(T::KEY.name)
        )
    }
}

/// Quote SQL identifier
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

pub fn bind_value_query<'q>(
    q: sqlx::query::Query<'q, Postgres, PgArguments>,
    v: SqlValue,
) -> sqlx::query::Query<'q, Postgres, PgArguments> {
    match v {
        SqlValue::Int(i) => q.bind(i),
        SqlValue::NullableInt(i) => q.bind(i),
        SqlValue::BigInt(i) => q.bind(i),
        SqlValue::Text(s) => q.bind(s),
        SqlValue::NullableText(s) => q.bind(s),
        SqlValue::Date(d) => q.bind(d),
    }
}

pub fn bind_value_query_as<'q, O>(
    q: sqlx::query::QueryAs<'q, Postgres, O, PgArguments>,
    v: SqlValue,
) -> sqlx::query::QueryAs<'q, Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, PgRow>,
{
    match v {
        SqlValue::Int(i) => q.bind(i),
        SqlValue::NullableInt(i) => q.bind(i),
        SqlValue::BigInt(i) => q.bind(i),
        SqlValue::Text(s) => q.bind(s),
        SqlValue::NullableText(s) => q.bind(s),
        SqlValue::Date(d) => q.bind(d),
    }
}
