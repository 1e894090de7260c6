use async_trait::async_trait;
use shop_types::domain::product::{Product, ProductUpdate};
use shop_types::domain::user::{User, UserUpdate};
use shop_types::ports::product_repository::ProductRepository;
use shop_types::ports::user_repository::UserRepository;
use shop_types::ports::RepoError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;
use uuid::Uuid;

const MIGRATIONS: [&str; 2] = [
    include_str!("../migrations/0001_create_users.sql"),
    include_str!("../migrations/0002_create_products.sql"),
];

#[derive(Clone)]
pub struct SqliteRepo {
    pool: SqlitePool,
}

#[derive(FromRow)]
struct DbUser {
    id: String,
    username: String,
    email: String,
    password: String,
}

impl DbUser {
    fn into_user(self) -> Result<User, RepoError> {
        let id = Uuid::parse_str(&self.id).map_err(|e| RepoError::DbError(e.to_string()))?;
        Ok(User {
            id,
            username: self.username,
            email: self.email,
            password: self.password,
        })
    }
}

#[derive(FromRow)]
struct DbProduct {
    id: String,
    name: String,
    price: f64,
    quantity: i64,
    image: String,
}

impl DbProduct {
    fn into_product(self) -> Result<Product, RepoError> {
        let id = Uuid::parse_str(&self.id).map_err(|e| RepoError::DbError(e.to_string()))?;
        Ok(Product {
            id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            image: self.image,
        })
    }
}

fn db_err(e: sqlx::Error) -> RepoError {
    RepoError::DbError(e.to_string())
}

impl SqliteRepo {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");

        // Ensure on-disk SQLite target directory exists.
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            if !in_memory {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Every connection to an in-memory database opens a fresh one, so keep
        // exactly one connection alive for the lifetime of the pool.
        let pool = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePool::connect_with(options).await?
        };

        for ddl in MIGRATIONS {
            sqlx::query(ddl).execute(&pool).await?;
        }

        Ok(Self { pool })
    }
}

#[async_trait]
impl UserRepository for SqliteRepo {
    async fn create_user(&self, user: User) -> Result<User, RepoError> {
        sqlx::query("INSERT INTO users (id, username, email, password) VALUES (?, ?, ?, ?)")
            .bind(user.id.to_string())
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let row: Option<DbUser> =
            sqlx::query_as("SELECT id, username, email, password FROM users WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_err)?;
        row.map(|r| r.into_user()).transpose()
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Updates may leave duplicate emails behind; the earliest registration wins.
        let row: Option<DbUser> = sqlx::query_as(
            "SELECT id, username, email, password FROM users WHERE email = ? ORDER BY rowid LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;
        row.map(|r| r.into_user()).transpose()
    }

    async fn list_users(&self) -> Result<Vec<User>, RepoError> {
        let rows: Vec<DbUser> =
            sqlx::query_as("SELECT id, username, email, password FROM users ORDER BY rowid")
                .fetch_all(&self.pool)
                .await
                .map_err(db_err)?;

        rows.into_iter()
            .map(|r| r.into_user())
            .collect::<Result<Vec<_>, _>>()
    }

    async fn update_user(
        &self,
        id: Uuid,
        changes: UserUpdate,
    ) -> Result<Option<User>, RepoError> {
        let updated = sqlx::query(
            "UPDATE users SET username = COALESCE(?, username), email = COALESCE(?, email),
             password = COALESCE(?, password) WHERE id = ?",
        )
        .bind(changes.username)
        .bind(changes.email)
        .bind(changes.password)
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        if updated.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_user(id).await
    }

    async fn delete_user(&self, id: Uuid) -> Result<bool, RepoError> {
        let res = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(res.rows_affected() > 0)
    }
}

#[async_trait]
impl ProductRepository for SqliteRepo {
    async fn create_product(&self, product: Product) -> Result<Product, RepoError> {
        sqlx::query(
            "INSERT INTO products (id, name, price, quantity, image) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(product.id.to_string())
        .bind(&product.name)
        .bind(product.price)
        .bind(product.quantity)
        .bind(&product.image)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(product)
    }

    async fn get_product(&self, id: Uuid) -> Result<Option<Product>, RepoError> {
        let row: Option<DbProduct> =
            sqlx::query_as("SELECT id, name, price, quantity, image FROM products WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_err)?;
        row.map(|r| r.into_product()).transpose()
    }

    async fn list_products(&self) -> Result<Vec<Product>, RepoError> {
        let rows: Vec<DbProduct> =
            sqlx::query_as("SELECT id, name, price, quantity, image FROM products ORDER BY rowid")
                .fetch_all(&self.pool)
                .await
                .map_err(db_err)?;

        rows.into_iter()
            .map(|r| r.into_product())
            .collect::<Result<Vec<_>, _>>()
    }

    async fn update_product(
        &self,
        id: Uuid,
        changes: ProductUpdate,
    ) -> Result<Option<Product>, RepoError> {
        let updated = sqlx::query(
            "UPDATE products SET name = COALESCE(?, name), price = COALESCE(?, price),
             quantity = COALESCE(?, quantity), image = COALESCE(?, image) WHERE id = ?",
        )
        .bind(changes.name)
        .bind(changes.price)
        .bind(changes.quantity)
        .bind(changes.image)
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        if updated.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_product(id).await
    }

    async fn delete_product(&self, id: Uuid) -> Result<bool, RepoError> {
        let res = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(res.rows_affected() > 0)
    }
}
