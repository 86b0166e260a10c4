// src/handlers/locations.rs

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Form, Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    common::error::ApiError,
    config::AppState,
    handlers::{redirect_failure, redirect_success, FormResponse},
    middleware::{flash::Flash, i18n::Locale},
    models::view::{LocationFormView, LocationListView},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct LocationForm {
    #[serde(default)]
    #[schema(example = "L1")]
    pub location_id: String,

    #[serde(default)]
    #[schema(example = "Dock")]
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LocationNameForm {
    #[serde(default)]
    #[schema(example = "Shelf B")]
    pub name: String,
}

// GET /locations
#[utoipa::path(
    get,
    path = "/locations",
    tag = "Locations",
    responses((status = 200, description = "Locais por id", body = LocationListView))
)]
pub async fn list_locations(
    State(app_state): State<AppState>,
    locale: Locale,
    flash: Flash,
) -> Result<impl IntoResponse, ApiError> {
    let locations = app_state
        .location_service
        .list_locations(&app_state.db_pool)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let (jar, notice) = flash.take();
    Ok((jar, Json(LocationListView { notice, locations })))
}

// GET /locations/add
#[utoipa::path(
    get,
    path = "/locations/add",
    tag = "Locations",
    responses((status = 200, description = "Formulário vazio", body = LocationFormView))
)]
pub async fn new_location_form(flash: Flash) -> impl IntoResponse {
    let (jar, notice) = flash.take();
    let view = LocationFormView {
        notice,
        location: None,
    };
    (jar, Json(view))
}

// POST /locations/add
#[utoipa::path(
    post,
    path = "/locations/add",
    tag = "Locations",
    request_body(content = LocationForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 303, description = "Redireciona com aviso"))
)]
pub async fn add_location(
    State(app_state): State<AppState>,
    locale: Locale,
    flash: Flash,
    Form(form): Form<LocationForm>,
) -> FormResponse {
    let result = app_state
        .location_service
        .add_location(&app_state.db_pool, &form.location_id, &form.name)
        .await;

    match result {
        Ok(location) => redirect_success(
            &app_state,
            &locale,
            flash,
            "location.added",
            &location.location_id,
            "/locations",
        ),
        Err(err) => redirect_failure(&app_state, &locale, flash, err, "/locations/add"),
    }
}

// GET /locations/edit/{id}
#[utoipa::path(
    get,
    path = "/locations/edit/{id}",
    tag = "Locations",
    params(("id" = String, Path, description = "ID do local")),
    responses(
        (status = 200, description = "Formulário preenchido", body = LocationFormView),
        (status = 404, description = "Local não encontrado")
    )
)]
pub async fn edit_location_form(
    State(app_state): State<AppState>,
    locale: Locale,
    flash: Flash,
    Path(location_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let location = app_state
        .location_service
        .get_location(&app_state.db_pool, &location_id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let (jar, notice) = flash.take();
    let view = LocationFormView {
        notice,
        location: Some(location),
    };
    Ok((jar, Json(view)))
}

// POST /locations/edit/{id}
#[utoipa::path(
    post,
    path = "/locations/edit/{id}",
    tag = "Locations",
    params(("id" = String, Path, description = "ID do local")),
    request_body(content = LocationNameForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redireciona com aviso"),
        (status = 404, description = "Local não encontrado")
    )
)]
pub async fn edit_location(
    State(app_state): State<AppState>,
    locale: Locale,
    flash: Flash,
    Path(location_id): Path<String>,
    Form(form): Form<LocationNameForm>,
) -> FormResponse {
    let result = app_state
        .location_service
        .edit_location(&app_state.db_pool, &location_id, &form.name)
        .await;

    match result {
        Ok(location) => redirect_success(
            &app_state,
            &locale,
            flash,
            "location.updated",
            &location.location_id,
            "/locations",
        ),
        Err(err) => redirect_failure(
            &app_state,
            &locale,
            flash,
            err,
            &format!("/locations/edit/{location_id}"),
        ),
    }
}

// POST /locations/delete/{id}
// Bloqueado enquanto alguma movimentação usar o local (volta para a lista com aviso).
#[utoipa::path(
    post,
    path = "/locations/delete/{id}",
    tag = "Locations",
    params(("id" = String, Path, description = "ID do local")),
    responses(
        (status = 303, description = "Redireciona com aviso"),
        (status = 404, description = "Local não encontrado")
    )
)]
pub async fn delete_location(
    State(app_state): State<AppState>,
    locale: Locale,
    flash: Flash,
    Path(location_id): Path<String>,
) -> FormResponse {
    let result = app_state
        .location_service
        .delete_location(&app_state.db_pool, &location_id)
        .await;

    match result {
        Ok(()) => redirect_success(
            &app_state,
            &locale,
            flash,
            "location.deleted",
            &location_id,
            "/locations",
        ),
        Err(err) => redirect_failure(&app_state, &locale, flash, err, "/locations"),
    }
}
