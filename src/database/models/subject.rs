use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::resource::{ignore_client_id, Column, KeyColumn, Resource, SqlValue};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Subject {
    #[serde(default, deserialize_with = "ignore_client_id")]
    pub id: i64,
    pub subject_name: String,
}

impl Resource for Subject {
    type Key = i64;

    const NAME: &'static str = "subject";
    const TABLE: &'static str = "subjects";
    const PATH: &'static str = "subjects";
    const KEY: KeyColumn = KeyColumn::serial("id");
    const FIELDS: &'static [Column] = &[Column::new("subject_name", "VARCHAR(100) NOT NULL")];

    fn key(&self) -> i64 {
        self.id
    }

    fn field_values(&self) -> Vec<SqlValue> {
        vec![SqlValue::Text(self.subject_name.clone())]
    }

    fn apply_update(&mut self, input: Self) {
        self.subject_name = input.subject_name;
    }
}
