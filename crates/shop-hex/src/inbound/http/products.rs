use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use super::Payload;
use crate::application::product_service::ProductService;
use crate::errors::AppError;
use shop_types::api::{
    CreateProductRequest, CreatedProduct, Message, ProductBody, ProductList, UpdatedProduct,
};
use shop_types::domain::product::ProductUpdate;
use shop_types::ports::product_repository::ProductRepository;

pub fn router<R: ProductRepository>(service: Arc<ProductService<R>>) -> Router {
    Router::new()
        .route("/products", get(list_products::<R>))
        .route("/product", post(create_product::<R>))
        .route(
            "/product/{id}",
            get(get_product::<R>)
                .put(update_product::<R>)
                .delete(delete_product::<R>),
        )
        .with_state(service)
}

async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> Result<Json<ProductList>, AppError> {
    let products = service.list_products().await?;
    Ok(Json(ProductList {
        total: products.len(),
        all_products: products,
    }))
}

async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<ProductBody>, AppError> {
    let product = service.get_product(&id).await?;
    Ok(Json(ProductBody { product }))
}

async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Payload(payload): Payload<CreateProductRequest>,
) -> Result<(StatusCode, Json<CreatedProduct>), AppError> {
    let new_product = service
        .create_product(payload.name, payload.price, payload.quantity, payload.image)
        .await?;
    Ok((StatusCode::CREATED, Json(CreatedProduct { new_product })))
}

async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    Payload(changes): Payload<ProductUpdate>,
) -> Result<Json<UpdatedProduct>, AppError> {
    let updated_product = service.update_product(&id, changes).await?;
    Ok(Json(UpdatedProduct {
        msg: "Product updated successfully".into(),
        updated_product,
    }))
}

async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<Message>, AppError> {
    service.delete_product(&id).await?;
    Ok(Json(Message {
        msg: "Product deleted successfully.".into(),
    }))
}
