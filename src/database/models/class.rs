use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::resource::{ignore_client_id, Column, KeyColumn, Resource, SqlValue};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Class {
    #[serde(default, deserialize_with = "ignore_client_id")]
    pub id: i64,
    pub grade: i32,
    pub letter: String,
}

impl Resource for Class {
    type Key = i64;

    const NAME: &'static str = "class";
    const TABLE: &'static str = "classes";
    const PATH: &'static str = "classes";
    const KEY: KeyColumn = KeyColumn::serial("id");
    const FIELDS: &'static [Column] = &[
        Column::new("grade", "INTEGER NOT NULL CHECK (grade >= 1 AND grade <= 12)"),
        Column::new("letter", "CHAR(1) NOT NULL CHECK (letter ~ '^[A-Z]')"),
    ];

    fn key(&self) -> i64 {
        self.id
    }

    fn field_values(&self) -> Vec<SqlValue> {
        vec![SqlValue::Int(self.grade), SqlValue::Text(self.letter.clone())]
    }

    fn apply_update(&mut self, input: Self) {
        self.grade = input.grade;
        self.letter = input.letter;
    }
}
