// src/models/product.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// --- Produto (catálogo) ---
// O `product_id` é atribuído externamente (ex: SKU) e nunca muda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    #[schema(example = "P1")]
    pub product_id: String,
    #[schema(example = "Widget")]
    pub name: String,
}

// Entrada já "limpa" (trim) para criação de um produto.
#[derive(Debug, Clone, Validate)]
pub struct NewProduct {
    #[validate(length(min = 1, message = "product.required"))]
    pub product_id: String,

    #[validate(length(min = 1, message = "product.required"))]
    pub name: String,
}

impl NewProduct {
    pub fn new(product_id: &str, name: &str) -> Self {
        Self {
            product_id: product_id.trim().to_string(),
            name: name.trim().to_string(),
        }
    }
}
