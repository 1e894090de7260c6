use super::parse_id;
use crate::errors::AppError;
use shop_types::domain::product::{Product, ProductUpdate};
use shop_types::ports::product_repository::ProductRepository;

pub struct ProductService<R: ProductRepository> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        let products = self.repo.list_products().await?;
        if products.is_empty() {
            return Err(AppError::NotFound("No products found!".into()));
        }
        Ok(products)
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, AppError> {
        let not_found = || AppError::NotFound("Product does not exist".into());
        let id = parse_id(id).ok_or_else(not_found)?;
        self.repo.get_product(id).await?.ok_or_else(not_found)
    }

    pub async fn create_product(
        &self,
        name: String,
        price: f64,
        quantity: i64,
        image: String,
    ) -> Result<Product, AppError> {
        let product = Product::new(name, price, quantity, image)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        let created = self.repo.create_product(product).await?;
        tracing::info!(product_id = %created.id, "product created");
        Ok(created)
    }

    pub async fn update_product(
        &self,
        id: &str,
        changes: ProductUpdate,
    ) -> Result<Product, AppError> {
        let not_found = || AppError::NotFound("Product does not exist.".into());
        let id = parse_id(id).ok_or_else(not_found)?;
        self.repo
            .update_product(id, changes)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), AppError> {
        let not_found = || AppError::NotFound(format!("No product found with ID {id}"));
        let uuid = parse_id(id).ok_or_else(not_found)?;
        if self.repo.delete_product(uuid).await? {
            tracing::info!(product_id = %uuid, "product deleted");
            Ok(())
        } else {
            Err(not_found())
        }
    }
}
