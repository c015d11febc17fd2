//! Storage trait definitions

use crate::error::StorageError;
use crate::model::Client;
use async_trait::async_trait;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage for client records
#[async_trait]
pub trait ClientStorage: Send + Sync {
    /// Get a client by id
    async fn find_client(&self, id: &str) -> StorageResult<Option<Client>>;

    /// List all clients in insertion order
    async fn list_clients(&self) -> StorageResult<Vec<Client>>;

    /// Insert a new client
    ///
    /// Fails with `Conflict` if the id is taken and `InvalidData` if the id
    /// does not satisfy the 3-character format.
    async fn create_client(&self, client: Client) -> StorageResult<Client>;

    /// Update the names of an existing client, leaving the id untouched
    ///
    /// Returns `None` if no client with the id exists.
    async fn update_client(
        &self,
        id: &str,
        first_name: String,
        last_name: String,
    ) -> StorageResult<Option<Client>>;

    /// Remove a client by id, returning the removed record
    async fn delete_client(&self, id: &str) -> StorageResult<Option<Client>>;
}
