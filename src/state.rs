use crate::database::{DatabaseManager, Repository, Resource};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseManager,
}

impl AppState {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }

    pub fn repository<R: Resource>(&self) -> Repository<R> {
        Repository::new(self.db.pool().clone())
    }
}
