pub mod product_repository;
pub mod user_repository;

#[derive(thiserror::Error, Debug)]
pub enum RepoError {
    #[error("db error: {0}")]
    DbError(String),
}
