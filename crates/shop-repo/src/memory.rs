use async_trait::async_trait;
use dashmap::DashMap;
use shop_types::domain::product::{Product, ProductUpdate};
use shop_types::domain::user::{User, UserUpdate};
use shop_types::ports::product_repository::ProductRepository;
use shop_types::ports::user_repository::UserRepository;
use shop_types::ports::RepoError;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct InMemoryRepo {
    pub users: Arc<DashMap<Uuid, User>>,
    pub products: Arc<DashMap<Uuid, Product>>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            users: Arc::new(DashMap::new()),
            products: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryRepo {
    async fn create_user(&self, user: User) -> Result<User, RepoError> {
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.users.get(&id).map(|r| r.clone()))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .users
            .iter()
            .find(|kv| kv.value().email == email)
            .map(|kv| kv.value().clone()))
    }

    async fn list_users(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.users.iter().map(|kv| kv.value().clone()).collect())
    }

    async fn update_user(
        &self,
        id: Uuid,
        changes: UserUpdate,
    ) -> Result<Option<User>, RepoError> {
        if let Some(mut v) = self.users.get_mut(&id) {
            v.apply(changes);
            return Ok(Some(v.clone()));
        }
        Ok(None)
    }

    async fn delete_user(&self, id: Uuid) -> Result<bool, RepoError> {
        Ok(self.users.remove(&id).is_some())
    }
}

#[async_trait]
impl ProductRepository for InMemoryRepo {
    async fn create_product(&self, product: Product) -> Result<Product, RepoError> {
        self.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn get_product(&self, id: Uuid) -> Result<Option<Product>, RepoError> {
        Ok(self.products.get(&id).map(|r| r.clone()))
    }

    async fn list_products(&self) -> Result<Vec<Product>, RepoError> {
        Ok(self.products.iter().map(|kv| kv.value().clone()).collect())
    }

    async fn update_product(
        &self,
        id: Uuid,
        changes: ProductUpdate,
    ) -> Result<Option<Product>, RepoError> {
        if let Some(mut v) = self.products.get_mut(&id) {
            v.apply(changes);
            return Ok(Some(v.clone()));
        }
        Ok(None)
    }

    async fn delete_product(&self, id: Uuid) -> Result<bool, RepoError> {
        Ok(self.products.remove(&id).is_some())
    }
}
