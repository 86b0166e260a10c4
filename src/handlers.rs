pub mod locations;
pub mod movements;
pub mod products;
pub mod report;

use axum::response::Redirect;
use axum_extra::extract::cookie::CookieJar;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{flash::Flash, i18n::Locale},
};

/// Resposta de um POST: sempre um redirect acompanhado do aviso (flash).
pub type FormResponse = Result<(CookieJar, Redirect), ApiError>;

// Sucesso: volta para a listagem com aviso verde.
pub(crate) fn redirect_success(
    app_state: &AppState,
    locale: &Locale,
    flash: Flash,
    key: &str,
    id: &str,
    to: &str,
) -> FormResponse {
    let message = app_state
        .i18n_store
        .translate_with(&locale.0, key, &[("id", id)]);
    Ok((flash.success(message), Redirect::to(to)))
}

// Erros esperados voltam para o formulário com aviso vermelho.
// O resto (404, banco fora do ar) vira resposta de erro.
pub(crate) fn redirect_failure(
    app_state: &AppState,
    locale: &Locale,
    flash: Flash,
    err: AppError,
    back_to: &str,
) -> FormResponse {
    if err.is_user_facing() {
        tracing::debug!("Operação rejeitada: {}", err);
        let message = err.localized(locale, &app_state.i18n_store);
        return Ok((flash.danger(message), Redirect::to(back_to)));
    }
    Err(err.to_api_error(locale, &app_state.i18n_store))
}
