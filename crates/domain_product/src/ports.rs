//! Product Domain Ports
//!
//! The product catalogue. Loan applications reference a product by id, so
//! the code, base rate, and principal ceiling a decision sees always come
//! from here and never from the applicant.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::{DomainPort, PortError, ProductId};

use crate::product::Product;

/// Storage for the product catalogue
#[async_trait]
pub trait ProductRepository: DomainPort {
    /// Inserts a product or replaces the one with the same id
    async fn save(&self, product: &Product) -> Result<(), PortError>;

    /// Retrieves a product by id, or `PortError::NotFound`
    async fn find_by_id(&self, id: ProductId) -> Result<Product, PortError>;

    /// Lists every product, ordered by name
    async fn find_all(&self) -> Result<Vec<Product>, PortError>;

    /// Removes a product, or `PortError::NotFound`
    async fn delete(&self, id: ProductId) -> Result<(), PortError>;
}

/// In-memory product repository
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

impl DomainPort for InMemoryProductRepository {}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: &Product) -> Result<(), PortError> {
        self.products.write().await.insert(product.id(), product.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Product, PortError> {
        self.products
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Product", id))
    }

    async fn find_all(&self) -> Result<Vec<Product>, PortError> {
        let mut products: Vec<Product> = self.products.read().await.values().cloned().collect();
        products.sort_by_key(|product| (product.name().to_string(), *product.id().as_uuid()));
        Ok(products)
    }

    async fn delete(&self, id: ProductId) -> Result<(), PortError> {
        self.products
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| PortError::not_found("Product", id))
    }
}
