//! Client Domain Ports
//!
//! Clients are registered ahead of any loan application and looked up by id
//! when one arrives. `save` is an upsert: updating a client stores a rebuilt
//! record under the same id.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_client::ports::{ClientRepository, InMemoryClientRepository};
//!
//! let clients: Arc<dyn ClientRepository> = Arc::new(InMemoryClientRepository::new());
//! clients.save(&client).await?;
//! let found = clients.find_by_id(client.id()).await?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::{ClientId, DomainPort, PortError};

use crate::client::Client;

/// Storage for registered clients
#[async_trait]
pub trait ClientRepository: DomainPort {
    /// Inserts a client or replaces the one with the same id
    async fn save(&self, client: &Client) -> Result<(), PortError>;

    /// Retrieves a client by id, or `PortError::NotFound`
    async fn find_by_id(&self, id: ClientId) -> Result<Client, PortError>;

    /// Lists every client, ordered by last name then first name
    async fn find_all(&self) -> Result<Vec<Client>, PortError>;

    /// Removes a client, or `PortError::NotFound`
    async fn delete(&self, id: ClientId) -> Result<(), PortError>;
}

/// In-memory client repository
#[derive(Debug, Default, Clone)]
pub struct InMemoryClientRepository {
    clients: Arc<RwLock<HashMap<ClientId, Client>>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.clients.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.clients.read().await.is_empty()
    }
}

impl DomainPort for InMemoryClientRepository {}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn save(&self, client: &Client) -> Result<(), PortError> {
        self.clients.write().await.insert(client.id(), client.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ClientId) -> Result<Client, PortError> {
        self.clients
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Client", id))
    }

    async fn find_all(&self) -> Result<Vec<Client>, PortError> {
        let mut clients: Vec<Client> = self.clients.read().await.values().cloned().collect();
        clients.sort_by_key(|client| {
            (
                client.full_name().last_name().to_string(),
                client.full_name().first_name().to_string(),
                *client.id().as_uuid(),
            )
        });
        Ok(clients)
    }

    async fn delete(&self, id: ClientId) -> Result<(), PortError> {
        self.clients
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| PortError::not_found("Client", id))
    }
}
