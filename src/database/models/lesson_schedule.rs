use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::resource::{ignore_client_id, Column, KeyColumn, Resource, SqlValue};

/// A recurring timetable slot: weekday 1 (Monday) to 7, lesson number 1 to 8.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct LessonSchedule {
    #[serde(default, deserialize_with = "ignore_client_id")]
    pub id: i64,
    pub subject_id: i64,
    pub weekday: i32,
    pub number: i32,
    pub class_id: i64,
    pub teacher_id: i64,
}

impl Resource for LessonSchedule {
    type Key = i64;

    const NAME: &'static str = "lesson schedule";
    const TABLE: &'static str = "lesson_schedules";
    const PATH: &'static str = "lesson-schedules";
    const KEY: KeyColumn = KeyColumn::serial("id");
    const FIELDS: &'static [Column] = &[
        Column::new("subject_id", "BIGINT NOT NULL"),
        Column::new("weekday", "INTEGER NOT NULL CHECK (weekday >= 1 AND weekday <= 7)"),
        Column::new("number", "INTEGER NOT NULL CHECK (number >= 1 AND number <= 8)"),
        Column::new("class_id", "BIGINT NOT NULL"),
        Column::new("teacher_id", "BIGINT NOT NULL"),
    ];

    fn key(&self) -> i64 {
        self.id
    }

    fn field_values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::BigInt(self.subject_id),
            SqlValue::Int(self.weekday),
            SqlValue::Int(self.number),
            SqlValue::BigInt(self.class_id),
            SqlValue::BigInt(self.teacher_id),
        ]
    }

    fn apply_update(&mut self, input: Self) {
        self.subject_id = input.subject_id;
        self.weekday = input.weekday;
        self.number = input.number;
        self.class_id = input.class_id;
        self.teacher_id = input.teacher_id;
    }
}
