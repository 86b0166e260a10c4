// src/handlers/movements.rs

use axum::{extract::State, response::IntoResponse, Form, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    common::error::ApiError,
    config::AppState,
    handlers::{redirect_failure, redirect_success, FormResponse},
    middleware::{flash::Flash, i18n::Locale},
    models::{
        movement::parse_quantity,
        view::{MovementFormView, MovementListView},
    },
};

// Tudo chega como texto opcional; a conversão de `qty` é explícita
// e um valor inválido é rejeitado (não vira erro 422).
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct MovementForm {
    #[schema(example = "P1")]
    pub product_id: Option<String>,

    #[schema(example = "10")]
    pub qty: Option<String>,

    // Vazio = entrada externa
    pub from_location: Option<String>,

    // Vazio = saída externa
    #[schema(example = "L1")]
    pub to_location: Option<String>,
}

// GET /movements
#[utoipa::path(
    get,
    path = "/movements",
    tag = "Movements",
    responses((status = 200, description = "Últimas 200 movimentações", body = MovementListView))
)]
pub async fn list_movements(
    State(app_state): State<AppState>,
    locale: Locale,
    flash: Flash,
) -> Result<impl IntoResponse, ApiError> {
    let movements = app_state
        .movement_service
        .list_recent_movements(&app_state.db_pool)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let (jar, notice) = flash.take();
    Ok((jar, Json(MovementListView { notice, movements })))
}

// GET /movements/add
#[utoipa::path(
    get,
    path = "/movements/add",
    tag = "Movements",
    responses((status = 200, description = "Opções do formulário", body = MovementFormView))
)]
pub async fn new_movement_form(
    State(app_state): State<AppState>,
    locale: Locale,
    flash: Flash,
) -> Result<impl IntoResponse, ApiError> {
    let products = app_state
        .product_service
        .list_products_by_name(&app_state.db_pool)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let locations = app_state
        .location_service
        .list_locations_by_name(&app_state.db_pool)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let (jar, notice) = flash.take();
    let view = MovementFormView {
        notice,
        products,
        locations,
    };
    Ok((jar, Json(view)))
}

// POST /movements/add
#[utoipa::path(
    post,
    path = "/movements/add",
    tag = "Movements",
    request_body(content = MovementForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 303, description = "Redireciona com aviso"))
)]
pub async fn add_movement(
    State(app_state): State<AppState>,
    locale: Locale,
    flash: Flash,
    Form(form): Form<MovementForm>,
) -> FormResponse {
    let qty = parse_quantity(form.qty.as_deref());

    let result = app_state
        .movement_service
        .record_movement(
            &app_state.db_pool,
            form.product_id.as_deref(),
            qty,
            form.from_location.as_deref(),
            form.to_location.as_deref(),
        )
        .await;

    match result {
        Ok(movement) => redirect_success(
            &app_state,
            &locale,
            flash,
            "movement.recorded",
            &movement.movement_id.to_string(),
            "/movements",
        ),
        Err(err) => redirect_failure(&app_state, &locale, flash, err, "/movements/add"),
    }
}
