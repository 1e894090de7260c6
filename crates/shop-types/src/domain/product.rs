use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MISSING_PRODUCT_FIELDS: &str = "Please provide all the required parameters.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Zero counts as missing for `price` and `quantity`, as does an empty string
    /// for `name` and `image`.
    pub fn new(name: String, price: f64, quantity: i64, image: String) -> anyhow::Result<Self> {
        if name.is_empty() || price == 0.0 || quantity == 0 || image.is_empty() {
            anyhow::bail!(MISSING_PRODUCT_FIELDS);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            price,
            quantity,
            image,
        })
    }

    pub fn apply(&mut self, changes: ProductUpdate) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(quantity) = changes.quantity {
            self.quantity = quantity;
        }
        if let Some(image) = changes.image {
            self.image = image;
        }
    }
}
