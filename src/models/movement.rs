// src/models/movement.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

// --- Movimentação de Produto (livro-razão) ---
// Nunca é editada nem apagada. O saldo é sempre recalculado a partir daqui.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProductMovement {
    pub movement_id: i64,
    pub timestamp: DateTime<Utc>,

    // None = entrada externa (fornecedor)
    #[schema(example = "L1")]
    pub from_location: Option<String>,

    // None = saída externa (cliente)
    #[schema(example = "L2")]
    pub to_location: Option<String>,

    #[schema(example = "P1")]
    pub product_id: String,

    #[schema(example = 4)]
    pub qty: i64,
}

/// Limite por movimentação. Mantém a soma do livro-razão longe do teto de `i64`.
pub const MAX_MOVEMENT_QTY: i64 = 1_000_000_000;

/// Movimentação validada, pronta para ser gravada.
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_qty_limit"))]
pub struct NewMovement {
    #[validate(required(message = "movement.required"))]
    pub product_id: Option<String>,

    #[validate(
        required(message = "movement.required"),
        range(min = 1, message = "movement.required")
    )]
    pub qty: Option<i64>,

    pub from_location: Option<String>,
    pub to_location: Option<String>,
}

impl NewMovement {
    /// Campos em branco viram `None`: um local vazio significa fluxo externo.
    pub fn new(
        product_id: Option<&str>,
        qty: Option<i64>,
        from_location: Option<&str>,
        to_location: Option<&str>,
    ) -> Self {
        Self {
            product_id: non_blank(product_id),
            qty,
            from_location: non_blank(from_location),
            to_location: non_blank(to_location),
        }
    }
}

fn validate_qty_limit(movement: &NewMovement) -> Result<(), ValidationError> {
    match movement.qty {
        Some(qty) if qty > MAX_MOVEMENT_QTY => {
            let mut error = ValidationError::new("qty_limit");
            error.message = Some("movement.qty_limit".into());
            Err(error)
        }
        _ => Ok(()),
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Converte o campo `qty` do formulário. Qualquer coisa que não seja um
/// inteiro vira `None` e é rejeitada na validação.
pub fn parse_quantity(raw: Option<&str>) -> Option<i64> {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<i64>().ok())
}
