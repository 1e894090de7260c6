use async_trait::async_trait;
use uuid::Uuid;

use super::RepoError;
use crate::domain::product::{Product, ProductUpdate};

#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    async fn create_product(&self, product: Product) -> Result<Product, RepoError>;
    async fn get_product(&self, id: Uuid) -> Result<Option<Product>, RepoError>;
    async fn list_products(&self) -> Result<Vec<Product>, RepoError>;
    async fn update_product(
        &self,
        id: Uuid,
        changes: ProductUpdate,
    ) -> Result<Option<Product>, RepoError>;
    async fn delete_product(&self, id: Uuid) -> Result<bool, RepoError>;
}
