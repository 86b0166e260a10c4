// src/handlers/products.rs

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
    models::view::{ProductFormView, ProductListView},
};

// ---
// Formulários
// ---
// Campos ausentes viram string vazia e caem na validação.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductForm {
    #[serde(default)]
    #[schema(example = "P1")]
    pub product_id: String,

    #[serde(default)]
    #[schema(example = "Widget")]
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductNameForm {
    #[serde(default)]
    #[schema(example = "Widget XL")]
    pub name: String,
}

// GET /products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses((status = 200, description = "Produtos por id", body = ProductListView))
)]
pub async fn list_products(
    State(app_state): State<AppState>,
    locale: Locale,
    flash: Flash,
) -> Result<impl IntoResponse, ApiError> {
    let products = app_state
        .product_service
        .list_products(&app_state.db_pool)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let (jar, notice) = flash.take();
    Ok((jar, Json(ProductListView { notice, products })))
}

// GET /products/add
#[utoipa::path(
    get,
    path = "/products/add",
    tag = "Products",
    responses((status = 200, description = "Formulário vazio", body = ProductFormView))
)]
pub async fn new_product_form(flash: Flash) -> impl IntoResponse {
    let (jar, notice) = flash.take();
    let view = ProductFormView {
        notice,
        product: None,
    };
    (jar, Json(view))
}

// POST /products/add
#[utoipa::path(
    post,
    path = "/products/add",
    tag = "Products",
    request_body(content = ProductForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 303, description = "Redireciona com aviso"))
)]
pub async fn add_product(
    State(app_state): State<AppState>,
    locale: Locale,
    flash: Flash,
    Form(form): Form<ProductForm>,
) -> FormResponse {
    let result = app_state
        .product_service
        .add_product(&app_state.db_pool, &form.product_id, &form.name)
        .await;

    match result {
        Ok(product) => redirect_success(
            &app_state,
            &locale,
            flash,
            "product.added",
            &product.product_id,
            "/products",
        ),
        Err(err) => redirect_failure(&app_state, &locale, flash, err, "/products/add"),
    }
}

// GET /products/edit/{id}
#[utoipa::path(
    get,
    path = "/products/edit/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Formulário preenchido", body = ProductFormView),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn edit_product_form(
    State(app_state): State<AppState>,
    locale: Locale,
    flash: Flash,
    Path(product_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let product = app_state
        .product_service
        .get_product(&app_state.db_pool, &product_id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let (jar, notice) = flash.take();
    let view = ProductFormView {
        notice,
        product: Some(product),
    };
    Ok((jar, Json(view)))
}

// POST /products/edit/{id}
#[utoipa::path(
    post,
    path = "/products/edit/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "ID do produto")),
    request_body(content = ProductNameForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redireciona com aviso"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn edit_product(
    State(app_state): State<AppState>,
    locale: Locale,
    flash: Flash,
    Path(product_id): Path<String>,
    Form(form): Form<ProductNameForm>,
) -> FormResponse {
    let result = app_state
        .product_service
        .edit_product(&app_state.db_pool, &product_id, &form.name)
        .await;

    match result {
        Ok(product) => redirect_success(
            &app_state,
            &locale,
            flash,
            "product.updated",
            &product.product_id,
            "/products",
        ),
        Err(err) => redirect_failure(
            &app_state,
            &locale,
            flash,
            err,
            &format!("/products/edit/{product_id}"),
        ),
    }
}

// POST /products/delete/{id}
#[utoipa::path(
    post,
    path = "/products/delete/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "ID do produto")),
    responses(
        (status = 303, description = "Redireciona com aviso"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    locale: Locale,
    flash: Flash,
    Path(product_id): Path<String>,
) -> FormResponse {
    let result = app_state
        .product_service
        .delete_product(&app_state.db_pool, &product_id)
        .await;

    match result {
        Ok(()) => redirect_success(
            &app_state,
            &locale,
            flash,
            "product.deleted",
            &product_id,
            "/products",
        ),
        Err(err) => redirect_failure(&app_state, &locale, flash, err, "/products"),
    }
}
