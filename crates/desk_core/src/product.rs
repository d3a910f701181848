//! Product - catalog entries that orders are built from.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a product is delivered.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    #[default]
    Physical,
    Digital,
    Service,
}

/// A catalog product. Price is in cents.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: u64,
    #[serde(default)]
    pub kind: ProductKind,
    pub stock: u32,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn default_active() -> bool {
    true
}

impl Product {
    pub fn new(name: impl Into<String>, price: u64, stock: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            kind: ProductKind::Physical,
            stock,
            active: true,
            image: None,
        }
    }

    /// Active products at or below `threshold` units need restocking.
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.active && self.stock <= threshold
    }
}
