use async_trait::async_trait;
use uuid::Uuid;

use super::RepoError;
use crate::domain::user::{User, UserUpdate};

#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    async fn create_user(&self, user: User) -> Result<User, RepoError>;
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, RepoError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
    async fn list_users(&self) -> Result<Vec<User>, RepoError>;
    /// Returns `None` when no user has the given id.
    async fn update_user(
        &self,
        id: Uuid,
        changes: UserUpdate,
    ) -> Result<Option<User>, RepoError>;
    async fn delete_user(&self, id: Uuid) -> Result<bool, RepoError>;
}
