// src/models/view.rs

// Documentos de "tela" devolvidos pelas rotas GET.
// Cada um carrega o aviso pendente (flash) da última operação.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    location::Location, movement::ProductMovement, product::Product, report::BalanceEntry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Danger,
}

/// Aviso transitório exibido uma única vez na próxima tela.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Danger,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListView {
    pub notice: Option<Notice>,
    pub products: Vec<Product>,
}

// `product` é None no formulário de criação.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductFormView {
    pub notice: Option<Notice>,
    pub product: Option<Product>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LocationListView {
    pub notice: Option<Notice>,
    pub locations: Vec<Location>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LocationFormView {
    pub notice: Option<Notice>,
    pub location: Option<Location>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MovementListView {
    pub notice: Option<Notice>,
    pub movements: Vec<ProductMovement>,
}

// Opções para os selects do formulário (ordenadas por nome).
#[derive(Debug, Serialize, ToSchema)]
pub struct MovementFormView {
    pub notice: Option<Notice>,
    pub products: Vec<Product>,
    pub locations: Vec<Location>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReportView {
    pub notice: Option<Notice>,
    pub products: Vec<Product>,
    pub locations: Vec<Location>,
    pub grid: Vec<BalanceEntry>,
}
