#[cfg(not(any(feature = "memory", feature = "sqlite")))]
compile_error!("Enable a repo feature: `memory` or `sqlite`.");

use shop_types::domain::product::{Product, ProductUpdate};
use shop_types::domain::user::{User, UserUpdate};
use shop_types::ports::product_repository::ProductRepository;
use shop_types::ports::user_repository::UserRepository;
use shop_types::ports::RepoError;
use uuid::Uuid;

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "sqlite")]
pub const DEFAULT_DATABASE_URL: &str = "sqlite://shop.db";

/// The backend selected at start-up. Implements both repository ports so a
/// single value can be handed to the user and product services.
#[derive(Clone)]
pub enum Repo {
    #[cfg(feature = "memory")]
    Memory(memory::InMemoryRepo),
    #[cfg(feature = "sqlite")]
    Sqlite(sqlite::SqliteRepo),
}

pub async fn build_repo(url: Option<&str>) -> anyhow::Result<Repo> {
    Repo::build_repo(url).await
}

impl Repo {
    /// With a database URL the sqlite backend is used when compiled in. Without
    /// one, memory is preferred and sqlite falls back to `DEFAULT_DATABASE_URL`.
    pub async fn build_repo(database_url: Option<&str>) -> anyhow::Result<Self> {
        match database_url {
            #[cfg(feature = "sqlite")]
            Some(url) => Ok(Self::Sqlite(sqlite::SqliteRepo::new(url).await?)),
            #[cfg(feature = "memory")]
            _ => Ok(Self::Memory(memory::InMemoryRepo::new())),
            #[cfg(not(feature = "memory"))]
            None => Ok(Self::Sqlite(
                sqlite::SqliteRepo::new(DEFAULT_DATABASE_URL).await?,
            )),
        }
    }
}

macro_rules! dispatch {
    ($self:ident, $repo:ident => $call:expr) => {
        match $self {
            #[cfg(feature = "memory")]
            Repo::Memory($repo) => $call,
            #[cfg(feature = "sqlite")]
            Repo::Sqlite($repo) => $call,
        }
    };
}

#[async_trait::async_trait]
impl UserRepository for Repo {
    async fn create_user(&self, user: User) -> Result<User, RepoError> {
        dispatch!(self, repo => repo.create_user(user).await)
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        dispatch!(self, repo => repo.get_user(id).await)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        dispatch!(self, repo => repo.find_user_by_email(email).await)
    }

    async fn list_users(&self) -> Result<Vec<User>, RepoError> {
        dispatch!(self, repo => repo.list_users().await)
    }

    async fn update_user(
        &self,
        id: Uuid,
        changes: UserUpdate,
    ) -> Result<Option<User>, RepoError> {
        dispatch!(self, repo => repo.update_user(id, changes).await)
    }

    async fn delete_user(&self, id: Uuid) -> Result<bool, RepoError> {
        dispatch!(self, repo => repo.delete_user(id).await)
    }
}

#[async_trait::async_trait]
impl ProductRepository for Repo {
    async fn create_product(&self, product: Product) -> Result<Product, RepoError> {
        dispatch!(self, repo => repo.create_product(product).await)
    }

    async fn get_product(&self, id: Uuid) -> Result<Option<Product>, RepoError> {
        dispatch!(self, repo => repo.get_product(id).await)
    }

    async fn list_products(&self) -> Result<Vec<Product>, RepoError> {
        dispatch!(self, repo => repo.list_products().await)
    }

    async fn update_product(
        &self,
        id: Uuid,
        changes: ProductUpdate,
    ) -> Result<Option<Product>, RepoError> {
        dispatch!(self, repo => repo.update_product(id, changes).await)
    }

    async fn delete_product(&self, id: Uuid) -> Result<bool, RepoError> {
        dispatch!(self, repo => repo.delete_product(id).await)
    }
}
