// src/models/report.rs

use serde::Serialize;
use utoipa::ToSchema;

use super::{location::Location, product::Product};

// Uma célula do relatório de saldos: (produto, local) -> quantidade.
// A quantidade pode ser negativa, o relatório não impõe piso.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BalanceEntry {
    pub product: Product,
    pub location: Location,
    pub qty: i64,
}
