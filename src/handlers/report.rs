// src/handlers/report.rs

use axum::{extract::State, response::{IntoResponse, Redirect}, Json};

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{flash::Flash, i18n::Locale},
    models::view::ReportView,
};

// GET /report
#[utoipa::path(
    get,
    path = "/report",
    tag = "Report",
    responses((status = 200, description = "Saldo por produto e local", body = ReportView))
)]
pub async fn balance_report(
    State(app_state): State<AppState>,
    locale: Locale,
    flash: Flash,
) -> Result<impl IntoResponse, ApiError> {
    let report = app_state
        .report_service
        .compute_balance_grid(&app_state.db_pool)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let (jar, notice) = flash.take();
    Ok((
        jar,
        Json(ReportView {
            notice,
            products: report.products,
            locations: report.locations,
            grid: report.grid,
        }),
    ))
}

// GET /
pub async fn home() -> Redirect {
    Redirect::to("/report")
}
