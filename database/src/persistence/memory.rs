use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    consts::consts::EntityId,
    error::DatabaseResult,
    model::person::{Person, PersonData},
};

use super::PersonStore;

/// Process local engine, used for development and tests. Documents are kept in insertion order.
pub struct MemoryStore {
    documents: RwLock<Vec<Person>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(vec![]),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersonStore for MemoryStore {
    async fn create(&self, data: PersonData) -> DatabaseResult<Person> {
        data.validate()?;

        let person = Person::from_data(EntityId::new(), data);

        self.documents.write().await.push(person.clone());

        Ok(person)
    }

    async fn find_all(&self) -> DatabaseResult<Vec<Person>> {
        Ok(self.documents.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<Person>> {
        let id = EntityId::try_from(id)?;

        let documents = self.documents.read().await;

        Ok(documents.iter().find(|p| p.id == id).cloned())
    }

    async fn update_by_id(&self, id: &str, data: PersonData) -> DatabaseResult<Option<Person>> {
        let id = EntityId::try_from(id)?;
        data.validate()?;

        let mut documents = self.documents.write().await;

        let updated = documents.iter_mut().find(|p| p.id == id).map(|person| {
            *person = Person::from_data(id, data);
            person.clone()
        });

        Ok(updated)
    }

    async fn delete_by_id(&self, id: &str) -> DatabaseResult<Option<Person>> {
        let id = EntityId::try_from(id)?;

        let mut documents = self.documents.write().await;

        let removed = documents
            .iter()
            .position(|p| p.id == id)
            .map(|index| documents.remove(index));

        Ok(removed)
    }

    async fn count(&self) -> DatabaseResult<u64> {
        Ok(self.documents.read().await.len() as u64)
    }
}
