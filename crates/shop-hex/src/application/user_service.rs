use super::parse_id;
use crate::errors::AppError;
use shop_types::domain::user::{User, UserUpdate};
use shop_types::ports::user_repository::UserRepository;

pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// An empty collection is reported as `NotFound` rather than an empty list.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let users = self.repo.list_users().await?;
        if users.is_empty() {
            return Err(AppError::NotFound("No users found.".into()));
        }
        Ok(users)
    }

    pub async fn get_user(&self, id: &str) -> Result<User, AppError> {
        let not_found = || AppError::NotFound("User not found!".into());
        let id = parse_id(id).ok_or_else(not_found)?;
        self.repo.get_user(id).await?.ok_or_else(not_found)
    }

    pub async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<User, AppError> {
        let user = User::new(username, email, password)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        if self.repo.find_user_by_email(&user.email).await?.is_some() {
            return Err(AppError::BadRequest(
                "This email is already registered.".into(),
            ));
        }
        let created = self.repo.create_user(user).await?;
        tracing::info!(user_id = %created.id, "user registered");
        Ok(created)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Please provide email and password.".into(),
            ));
        }
        let user = self
            .repo
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("No user found with the given email.".into()))?;
        if !user.password_matches(password) {
            tracing::debug!(user_id = %user.id, "login rejected");
            return Err(AppError::Unauthorized("Incorrect password!".into()));
        }
        Ok(user)
    }

    pub async fn update_user(&self, id: &str, changes: UserUpdate) -> Result<User, AppError> {
        let not_found = || AppError::NotFound("User not found!".into());
        let id = parse_id(id).ok_or_else(not_found)?;
        self.repo
            .update_user(id, changes)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let not_found = || AppError::NotFound(format!("User with ID {id} does not exist."));
        let uuid = parse_id(id).ok_or_else(not_found)?;
        if self.repo.delete_user(uuid).await? {
            tracing::info!(user_id = %uuid, "user deleted");
            Ok(())
        } else {
            Err(not_found())
        }
    }
}
