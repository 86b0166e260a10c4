pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::{
    routing::{get, post},
    Router,
};

use crate::config::AppState;

fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(handlers::products::list_products))
        .route(
            "/products/add",
            get(handlers::products::new_product_form).post(handlers::products::add_product),
        )
        .route(
            "/products/edit/{id}",
            get(handlers::products::edit_product_form).post(handlers::products::edit_product),
        )
        .route("/products/delete/{id}", post(handlers::products::delete_product))
}

fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/locations", get(handlers::locations::list_locations))
        .route(
            "/locations/add",
            get(handlers::locations::new_location_form).post(handlers::locations::add_location),
        )
        .route(
            "/locations/edit/{id}",
            get(handlers::locations::edit_location_form).post(handlers::locations::edit_location),
        )
        .route("/locations/delete/{id}", post(handlers::locations::delete_location))
}

fn movement_routes() -> Router<AppState> {
    Router::new()
        .route("/movements", get(handlers::movements::list_movements))
        .route(
            "/movements/add",
            get(handlers::movements::new_movement_form).post(handlers::movements::add_movement),
        )
}

/// Monta o router principal com todas as rotas.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::report::home))
        .route("/report", get(handlers::report::balance_report))
        .route("/health", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .merge(product_routes())
        .merge(location_routes())
        .merge(movement_routes())
        .with_state(app_state)
}
