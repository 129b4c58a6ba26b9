use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::resource::{ignore_client_id, Column, KeyColumn, Resource, SqlValue};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Teacher {
    #[serde(default, deserialize_with = "ignore_client_id")]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub patronymic: Option<String>,
}

impl Resource for Teacher {
    type Key = i64;

    const NAME: &'static str = "teacher";
    const TABLE: &'static str = "teachers";
    const PATH: &'static str = "teachers";
    const KEY: KeyColumn = KeyColumn::serial("id");
    const FIELDS: &'static [Column] = &[
        Column::new("first_name", "VARCHAR(50) NOT NULL"),
        Column::new("last_name", "VARCHAR(50) NOT NULL"),
        Column::new("patronymic", "VARCHAR(50)"),
    ];

    fn key(&self) -> i64 {
        self.id
    }

    fn field_values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(self.first_name.clone()),
            SqlValue::Text(self.last_name.clone()),
            SqlValue::NullableText(self.patronymic.clone()),
        ]
    }

    fn apply_update(&mut self, input: Self) {
        self.first_name = input.first_name;
        self.last_name = input.last_name;
        self.patronymic = input.patronymic;
    }
}
