use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::resource::{Column, KeyColumn, Resource, SqlValue};

/// Lookup table of attendance codes, keyed by a single character (e.g. `P`, `A`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct AttendanceStatus {
    pub code: String,
    pub description: String,
}

impl Resource for AttendanceStatus {
    type Key = String;

    const NAME: &'static str = "attendance status";
    const TABLE: &'static str = "attendance_statuses";
    const PATH: &'static str = "attendance-statuses";
    const KEY: KeyColumn = KeyColumn::natural("code", "CHAR(1) PRIMARY KEY");
    const FIELDS: &'static [Column] = &[Column::new("description", "VARCHAR(50) NOT NULL")];

    fn key(&self) -> String {
        self.code.clone()
    }

    fn field_values(&self) -> Vec<SqlValue> {
        vec![SqlValue::Text(self.description.clone())]
    }

    fn apply_update(&mut self, input: Self) {
        self.description = input.description;
    }
}
