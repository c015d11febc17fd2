//! In-memory storage implementation

use super::traits::*;
use crate::error::StorageError;
use crate::model::{self, Client};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory client store
///
/// The backing collection is a `Vec` because listing order is part of the
/// contract: records come back in insertion order. One lock guards all
/// mutations; ids stay unique within the store.
#[derive(Debug)]
pub struct InMemoryStore {
    clients: Arc<RwLock<Vec<Client>>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self {
            clients: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ClientStorage for InMemoryStore {
    async fn find_client(&self, id: &str) -> StorageResult<Option<Client>> {
        let clients = self.clients.read().await;
        Ok(clients.iter().find(|c| c.id == id).cloned())
    }

    async fn list_clients(&self) -> StorageResult<Vec<Client>> {
        let clients = self.clients.read().await;
        Ok(clients.clone())
    }

    async fn create_client(&self, client: Client) -> StorageResult<Client> {
        model::validate_id(&client.id)
            .map_err(|e| StorageError::InvalidData(e.to_string()))?;

        let mut clients = self.clients.write().await;
        if clients.iter().any(|c| c.id == client.id) {
            return Err(StorageError::Conflict(format!(
                "Client {} already exists",
                client.id
            )));
        }

        clients.push(client.clone());
        Ok(client)
    }

    async fn update_client(
        &self,
        id: &str,
        first_name: String,
        last_name: String,
    ) -> StorageResult<Option<Client>> {
        let mut clients = self.clients.write().await;
        Ok(clients.iter_mut().find(|c| c.id == id).map(|c| {
            c.first_name = first_name;
            c.last_name = last_name;
            c.clone()
        }))
    }

    async fn delete_client(&self, id: &str) -> StorageResult<Option<Client>> {
        let mut clients = self.clients.write().await;
        Ok(clients
            .iter()
            .position(|c| c.id == id)
            .map(|i| clients.remove(i)))
    }
}
