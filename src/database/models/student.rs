use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::resource::{ignore_client_id, Column, KeyColumn, Resource, SqlValue};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    #[serde(default, deserialize_with = "ignore_client_id")]
    pub id: i64,
    pub class_id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub patronymic: Option<String>,
}

impl Resource for Student {
    type Key = i64;

    const NAME: &'static str = "student";
    const TABLE: &'static str = "students";
    const PATH: &'static str = "students";
    const KEY: KeyColumn = KeyColumn::serial("id");
    const FIELDS: &'static [Column] = &[
        Column::new("class_id", "BIGINT NOT NULL"),
        Column::new("first_name", "VARCHAR(50) NOT NULL"),
        Column::new("last_name", "VARCHAR(50) NOT NULL"),
        Column::new("patronymic", "VARCHAR(50)"),
    ];

    fn key(&self) -> i64 {
        self.id
    }

    fn field_values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::BigInt(self.class_id),
            SqlValue::Text(self.first_name.clone()),
            SqlValue::Text(self.last_name.clone()),
            SqlValue::NullableText(self.patronymic.clone()),
        ]
    }

    fn apply_update(&mut self, input: Self) {
        self.class_id = input.class_id;
        self.first_name = input.first_name;
        self.last_name = input.last_name;
        self.patronymic = input.patronymic;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patronymic_may_be_omitted() {
        let student: Student =
            serde_json::from_str(r#"{"class_id":1,"first_name":"Anna","last_name":"Ivanova"}"#)
                .unwrap();
        assert_eq!(student.patronymic, None);
        assert_eq!(student.field_values().len(), Student::FIELDS.len());
    }
}
