//! Request and response bodies exchanged over HTTP.
//!
//! Field names follow the wire format, so several envelopes rename their
//! members to camelCase.

use serde::{Deserialize, Serialize};

use crate::domain::product::Product;
use crate::domain::user::User;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Missing fields deserialize to their zero value and are then rejected by
/// `Product::new`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserList {
    pub total_users: usize,
    #[serde(rename = "allUsers")]
    pub all_users: Vec<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserBody {
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisteredUser {
    #[serde(rename = "newUser")]
    pub new_user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdatedUser {
    pub msg: String,
    #[serde(rename = "updatedUser")]
    pub updated_user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductList {
    pub total: usize,
    #[serde(rename = "allProducts")]
    pub all_products: Vec<Product>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductBody {
    pub product: Product,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedProduct {
    #[serde(rename = "newProduct")]
    pub new_product: Product,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdatedProduct {
    pub msg: String,
    #[serde(rename = "updatedProduct")]
    pub updated_product: Product,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub msg: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
