//! Startup schema synchronization: every resource table is created if missing
//! and gains any column it lacks. Columns are never dropped or retyped.

use sqlx::PgPool;
use tracing::{debug, info};

use crate::database::manager::DatabaseError;
use crate::database::models;
use crate::database::query_builder::quote_identifier;
use crate::database::resource::{Column, KeyColumn, Resource, ResourceVisitor};

/// Table layout of one resource, detached from its Rust type.
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub table: &'static str,
    pub key: KeyColumn,
    pub fields: &'static [Column],
}

impl TableSchema {
    pub fn of<R: Resource>() -> Self {
        Self {
            table: R::TABLE,
            key: R::KEY,
            fields: R::FIELDS,
        }
    }

    fn columns(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        std::iter::once((self.key.name, self.key.definition))
            .chain(self.fields.iter().map(|c| (c.name, c.definition)))
    }

    pub fn create_table_sql(&self) -> String {
        let columns = self
            .columns()
            .map(|(name, definition)| format!("    {} {}", quote_identifier(name), definition))
            .collect::<Vec<_>>()
            .join(",\n");

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n{}\n)",
            quote_identifier(self.table),
            columns
        )
    }

    pub fn add_column_sql(&self) -> Vec<String> {
        self.columns()
            .map(|(name, definition)| {
                format!(
                    "ALTER TABLE {} ADD COLUMN IF NOT EXISTS {} {}",
                    quote_identifier(self.table),
                    quote_identifier(name),
                    definition
                )
            })
            .collect()
    }

    pub async fn synchronize(&self, pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query(&self.create_table_sql()).execute(pool).await?;
        for ddl in self.add_column_sql() {
            debug!("{}", ddl);
            sqlx::query(&ddl).execute(pool).await?;
        }
        Ok(())
    }
}

#[derive(Default)]
struct SchemaCollector {
    tables: Vec<TableSchema>,
}

impl ResourceVisitor for SchemaCollector {
    fn visit<R: Resource>(&mut self) {
        self.tables.push(TableSchema::of::<R>());
    }
}

/// Layouts of every registered resource, in registration order.
pub fn all_tables() -> Vec<TableSchema> {
    let mut collector = SchemaCollector::default();
    models::visit_all(&mut collector);
    collector.tables
}

pub async fn synchronize(pool: &PgPool) -> Result<(), DatabaseError> {
    for table in all_tables() {
        table.synchronize(pool).await?;
        info!("Synchronized table {}", table.table);
    }
    Ok(())
}
