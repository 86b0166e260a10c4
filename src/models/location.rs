// src/models/location.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// --- Local de armazenagem (Doca, Prateleira, Barracão) ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Location {
    #[schema(example = "L1")]
    pub location_id: String,
    #[schema(example = "Dock")]
    pub name: String,
}

#[derive(Debug, Clone, Validate)]
pub struct NewLocation {
    #[validate(length(min = 1, message = "location.required"))]
    pub location_id: String,

    #[validate(length(min = 1, message = "location.required"))]
    pub name: String,
}

impl NewLocation {
    pub fn new(location_id: &str, name: &str) -> Self {
        Self {
            location_id: location_id.trim().to_string(),
            name: name.trim().to_string(),
        }
    }
}
