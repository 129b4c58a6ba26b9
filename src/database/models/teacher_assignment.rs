use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::resource::{ignore_client_id, Column, KeyColumn, Resource, SqlValue};

/// Which teacher teaches which subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TeacherAssignment {
    #[serde(default, deserialize_with = "ignore_client_id")]
    pub id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
}

impl Resource for TeacherAssignment {
    type Key = i64;

    const NAME: &'static str = "teacher assignment";
    const TABLE: &'static str = "teacher_assignments";
    const PATH: &'static str = "teacher-assignments";
    const KEY: KeyColumn = KeyColumn::serial("id");
    const FIELDS: &'static [Column] = &[
        Column::new("teacher_id", "BIGINT NOT NULL"),
        Column::new("subject_id", "BIGINT NOT NULL"),
    ];

    fn key(&self) -> i64 {
        self.id
    }

    fn field_values(&self) -> Vec<SqlValue> {
        vec![SqlValue::BigInt(self.teacher_id), SqlValue::BigInt(self.subject_id)]
    }

    fn apply_update(&mut self, input: Self) {
        self.teacher_id = input.teacher_id;
        self.subject_id = input.subject_id;
    }
}
