use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrorsKind;

use crate::{common::i18n::I18nStore, middleware::i18n::Locale};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Produto já existe: {0}")]
    ProductAlreadyExists(String),

    #[error("Local já existe: {0}")]
    LocationAlreadyExists(String),

    #[error("Produto não encontrado: {0}")]
    ProductNotFound(String),

    #[error("Local não encontrado: {0}")]
    LocationNotFound(String),

    // Integridade referencial: o local ainda aparece em alguma movimentação
    #[error("Local em uso por movimentações: {0}")]
    LocationInUse(String),

    // Saldo de (produto, local) saiu da faixa de i64 ao reler o livro-razão
    #[error("Saldo fora da faixa para ({0}, {1})")]
    BalanceOverflow(String, String),

    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro ao rodar as migrações: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    /// Erros esperados (culpa do formulário): voltam para a tela com um aviso
    /// em vez de virarem uma resposta de erro.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppError::ValidationError(_)
                | AppError::ProductAlreadyExists(_)
                | AppError::LocationAlreadyExists(_)
                | AppError::LocationInUse(_)
        )
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ProductAlreadyExists(_) | AppError::LocationAlreadyExists(_) => {
                StatusCode::CONFLICT
            }
            AppError::ProductNotFound(_) | AppError::LocationNotFound(_) => StatusCode::NOT_FOUND,
            AppError::LocationInUse(_) => StatusCode::CONFLICT,
            AppError::BalanceOverflow(..)
            | AppError::DatabaseError(_)
            | AppError::MigrationError(_)
            | AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Chave do catálogo de mensagens para este erro.
    /// Nas validações a chave vem do atributo `message` do validator.
    fn message_key(&self) -> &str {
        match self {
            AppError::ValidationError(errors) => errors
                .errors()
                .values()
                .filter_map(|kind| match kind {
                    ValidationErrorsKind::Field(errs) => Some(errs),
                    _ => None,
                })
                .flatten()
                .find_map(|e| e.message.as_deref())
                .unwrap_or("validation.invalid"),
            AppError::ProductAlreadyExists(_) => "product.exists",
            AppError::LocationAlreadyExists(_) => "location.exists",
            AppError::ProductNotFound(_) => "product.not_found",
            AppError::LocationNotFound(_) => "location.not_found",
            AppError::LocationInUse(_) => "location.in_use",
            _ => "error.internal",
        }
    }

    fn subject_id(&self) -> &str {
        match self {
            AppError::ProductAlreadyExists(id)
            | AppError::LocationAlreadyExists(id)
            | AppError::ProductNotFound(id)
            | AppError::LocationNotFound(id)
            | AppError::LocationInUse(id) => id,
            _ => "",
        }
    }

    /// Mensagem traduzida para o idioma do cliente.
    pub fn localized(&self, locale: &Locale, store: &I18nStore) -> String {
        store.translate_with(&locale.0, self.message_key(), &[("id", self.subject_id())])
    }

    /// Converte para a resposta HTTP. Erros 500 são logados aqui,
    /// e o cliente recebe apenas a mensagem genérica.
    pub fn to_api_error(&self, locale: &Locale, store: &I18nStore) -> ApiError {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Erro Interno do Servidor: {}", self);
        }
        ApiError {
            status,
            message: self.localized(locale, store),
        }
    }
}

// Erro já traduzido, pronto para virar resposta.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{movement::NewMovement, product::NewProduct};
    use validator::Validate;

    fn en() -> Locale {
        Locale("en".to_string())
    }

    #[test]
    fn validation_errors_use_the_field_message_key() {
        let errors = NewProduct::new("  ", "Widget").validate().unwrap_err();
        let err = AppError::ValidationError(errors);
        let store = I18nStore::new();

        assert!(err.is_user_facing());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.localized(&en(), &store), "Product ID and name required");
    }

    #[test]
    fn not_found_is_not_user_facing() {
        let err = AppError::LocationNotFound("L9".into());
        let api = err.to_api_error(&en(), &I18nStore::new());

        assert!(!err.is_user_facing());
        assert_eq!(api.status, StatusCode::NOT_FOUND);
        assert_eq!(api.message, "Location L9 not found");
    }

    #[test]
    fn database_errors_hide_details() {
        let err = AppError::DatabaseError(sqlx::Error::PoolTimedOut);
        let api = err.to_api_error(&Locale("pt".into()), &I18nStore::new());

        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, "Ocorreu um erro inesperado.");
    }

    #[test]
    fn qty_above_the_limit_has_its_own_message() {
        let errors = NewMovement::new(Some("P1"), Some(i64::MAX), None, Some("L1"))
            .validate()
            .unwrap_err();
        let err = AppError::ValidationError(errors);

        assert!(err.is_user_facing());
        assert_eq!(
            err.localized(&en(), &I18nStore::new()),
            "Qty must be at most 1000000000"
        );
    }

    #[test]
    fn balance_overflow_is_an_internal_error() {
        let err = AppError::BalanceOverflow("P1".into(), "L1".into());
        let api = err.to_api_error(&en(), &I18nStore::new());

        assert!(!err.is_user_facing());
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, "An unexpected error occurred.");
    }
}
