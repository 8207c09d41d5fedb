use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::DatabaseResult,
    model::person::{Person, PersonData},
};

pub mod memory;
pub mod postgres;

/// Boundary between the request handlers and the document store.
///
/// Ids are taken as raw strings; every engine rejects ids outside the identifier format with
/// `DatabaseError::MalformedIdentifier` before touching its documents. Operations that target a
/// single document return `None` when no document matches a well formed id.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Validates and persists a new document, the store assigns the id
    async fn create(&self, data: PersonData) -> DatabaseResult<Person>;

    /// All documents in store defined order
    async fn find_all(&self) -> DatabaseResult<Vec<Person>>;

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<Person>>;

    /// Full replace of name and number, both are re-validated
    async fn update_by_id(&self, id: &str, data: PersonData) -> DatabaseResult<Option<Person>>;

    /// Removes the document and returns what was removed
    async fn delete_by_id(&self, id: &str) -> DatabaseResult<Option<Person>>;

    async fn count(&self) -> DatabaseResult<u64>;
}

#[derive(Clone)]
pub enum StorageEngine {
    /// Documents are kept in process and lost on restart
    Memory,
    /// Connection string of the postgres server holding the document table
    Postgres(String),
}

impl StorageEngine {
    pub fn name(&self) -> &'static str {
        match self {
            StorageEngine::Memory => "memory",
            StorageEngine::Postgres(_) => "postgres",
        }
    }

    /// Creates the process wide store handle, called once on start-up
    pub async fn connect(self) -> DatabaseResult<Arc<dyn PersonStore>> {
        let store: Arc<dyn PersonStore> = match self {
            StorageEngine::Memory => Arc::new(memory::MemoryStore::new()),
            StorageEngine::Postgres(connection_string) => {
                Arc::new(postgres::PgStore::connect(&connection_string).await?)
            }
        };

        Ok(store)
    }
}

impl Default for StorageEngine {
    fn default() -> Self {
        StorageEngine::Memory
    }
}
