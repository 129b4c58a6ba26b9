use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::query_builder::{bind_value_query, bind_value_query_as, QueryBuilder};
use crate::database::resource::{Resource, ResourceKey};

/// Row access for one resource type.
pub struct Repository<T> {
    pool: PgPool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Resource> Repository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    pub async fn select_all(&self) -> Result<Vec<T>, DatabaseError> {
        let sql = QueryBuilder::<T>::select_all();
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    pub async fn select_one(&self, key: &T::Key) -> Result<Option<T>, DatabaseError> {
        let sql = QueryBuilder::<T>::select_by_key();
        let q = bind_value_query_as(sqlx::query_as::<_, T>(&sql), key.to_value());
        let row = q.fetch_optional(&self.pool).await?;
        Ok(row)
    }

    pub async fn select_404(&self, key: &T::Key) -> Result<T, DatabaseError> {
        self.select_one(key)
            .await?
            .ok_or_else(|| Self::not_found(key))
    }

    /// Insert and return the stored row, including a store-assigned key.
    pub async fn insert(&self, record: &T) -> Result<T, DatabaseError> {
        let sql = QueryBuilder::<T>::insert();
        let mut q = sqlx::query_as::<_, T>(&sql);
        for v in record.insert_values() {
            q = bind_value_query_as(q, v);
        }
        let row = q.fetch_one(&self.pool).await?;
        Ok(row)
    }

    /// Write every non-key field of `record` to the row with the same key.
    pub async fn update(&self, record: &T) -> Result<T, DatabaseError> {
        let sql = QueryBuilder::<T>::update();
        let key = record.key();
        let mut q = sqlx::query_as::<_, T>(&sql);
        for v in record.field_values() {
            q = bind_value_query_as(q, v);
        }
        q = bind_value_query_as(q, key.to_value());

        q.fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Self::not_found(&key))
    }

    /// Returns the number of rows removed; zero is not an error.
    pub async fn delete(&self, key: &T::Key) -> Result<u64, DatabaseError> {
        let sql = QueryBuilder::<T>::delete();
        let result = bind_value_query(sqlx::query(&sql), key.to_value())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    fn not_found(key: &T::Key) -> DatabaseError {
        DatabaseError::NotFound(format!("{} {} not found", T::NAME, key))
    }
}
