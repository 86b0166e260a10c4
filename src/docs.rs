// src/docs.rs

use axum::Json;
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Products ---
        handlers::products::list_products,
        handlers::products::new_product_form,
        handlers::products::add_product,
        handlers::products::edit_product_form,
        handlers::products::edit_product,
        handlers::products::delete_product,

        // --- Locations ---
        handlers::locations::list_locations,
        handlers::locations::new_location_form,
        handlers::locations::add_location,
        handlers::locations::edit_location_form,
        handlers::locations::edit_location,
        handlers::locations::delete_location,

        // --- Movements ---
        handlers::movements::list_movements,
        handlers::movements::new_movement_form,
        handlers::movements::add_movement,

        // --- Report ---
        handlers::report::balance_report,
    ),
    components(
        schemas(
            models::product::Product,
            models::location::Location,
            models::movement::ProductMovement,
            models::report::BalanceEntry,

            // --- Telas ---
            models::view::NoticeLevel,
            models::view::Notice,
            models::view::ProductListView,
            models::view::ProductFormView,
            models::view::LocationListView,
            models::view::LocationFormView,
            models::view::MovementListView,
            models::view::MovementFormView,
            models::view::ReportView,

            // --- Formulários ---
            handlers::products::ProductForm,
            handlers::products::ProductNameForm,
            handlers::locations::LocationForm,
            handlers::locations::LocationNameForm,
            handlers::movements::MovementForm,
        )
    ),
    tags(
        (name = "Products", description = "Cadastro de Produtos"),
        (name = "Locations", description = "Cadastro de Locais"),
        (name = "Movements", description = "Livro-razão de Movimentações"),
        (name = "Report", description = "Saldo por Produto e Local")
    )
)]
pub struct ApiDoc;

// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
