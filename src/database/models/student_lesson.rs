use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::resource::{ignore_client_id, Column, KeyColumn, Resource, SqlValue};

/// A student's result for one logged lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StudentLesson {
    #[serde(default, deserialize_with = "ignore_client_id")]
    pub id: i64,
    pub student_id: i64,
    pub lesson_id: i64,
    #[serde(default)]
    pub grade: Option<i32>,
    /// Code of an `AttendanceStatus`.
    pub attendance_status: String,
}

impl Resource for StudentLesson {
    type Key = i64;

    const NAME: &'static str = "student lesson";
    const TABLE: &'static str = "student_lessons";
    const PATH: &'static str = "student-lessons";
    const KEY: KeyColumn = KeyColumn::serial("id");
    const FIELDS: &'static [Column] = &[
        Column::new("student_id", "BIGINT NOT NULL"),
        Column::new("lesson_id", "BIGINT NOT NULL"),
        Column::new("grade", "INTEGER"),
        Column::new("attendance_status", "CHAR(1) NOT NULL"),
    ];

    fn key(&self) -> i64 {
        self.id
    }

    fn field_values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::BigInt(self.student_id),
            SqlValue::BigInt(self.lesson_id),
            SqlValue::NullableInt(self.grade),
            SqlValue::Text(self.attendance_status.clone()),
        ]
    }

    fn apply_update(&mut self, input: Self) {
        self.student_id = input.student_id;
        self.lesson_id = input.lesson_id;
        self.grade = input.grade;
        self.attendance_status = input.attendance_status;
    }
}
