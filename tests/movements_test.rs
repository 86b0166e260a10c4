//! Registro e listagem de movimentações.

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::{assert_redirect, notice_cookie, response_json, TestApp};
use inventory_tracker::common::error::AppError;

#[tokio::test]
async fn record_movement_stamps_current_time() {
    let app = TestApp::new().await;
    let before = Utc::now();

    let movement = app
        .state
        .movement_service
        .record_movement(&app.state.db_pool, Some("P1"), Some(10), None, Some("L1"))
        .await
        .unwrap();

    assert_eq!(movement.product_id, "P1");
    assert_eq!(movement.qty, 10);
    assert_eq!(movement.from_location, None);
    assert_eq!(movement.to_location.as_deref(), Some("L1"));
    assert!(movement.timestamp >= before && movement.timestamp <= Utc::now());
}

#[tokio::test]
async fn zero_or_missing_qty_is_rejected_without_a_row() {
    let app = TestApp::new().await;
    let svc = &app.state.movement_service;
    let pool = &app.state.db_pool;

    for qty in [Some(0), Some(-5), None] {
        let err = svc
            .record_movement(pool, Some("P1"), qty, None, Some("L1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)), "{qty:?}");
    }
    let err = svc
        .record_movement(pool, None, Some(3), None, Some("L1"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));

    assert_eq!(app.movement_count().await, 0);
}

#[tokio::test]
async fn unknown_references_are_accepted_without_foreign_keys() {
    let app = TestApp::new().await;

    let movement = app
        .state
        .movement_service
        .record_movement(
            &app.state.db_pool,
            Some("GHOST"),
            Some(1),
            Some("NOWHERE"),
            None,
        )
        .await
        .unwrap();

    assert_eq!(movement.product_id, "GHOST");
}

#[tokio::test]
async fn recent_movements_are_newest_first_and_capped_at_200() {
    let app = TestApp::new().await;
    for qty in 1..=205 {
        app.seed_movement("P1", qty, None, Some("L1")).await;
    }

    let movements = app
        .state
        .movement_service
        .list_recent_movements(&app.state.db_pool)
        .await
        .unwrap();

    assert_eq!(movements.len(), 200);
    assert_eq!(movements[0].qty, 205);
    assert_eq!(movements[199].qty, 6);
    assert!(movements.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
}

// ---
// Rotas
// ---

#[tokio::test]
async fn form_lists_products_and_locations_by_name() {
    let app = TestApp::new().await;
    app.seed_product("P1", "Widget").await;
    app.seed_product("P2", "Anvil").await;
    app.seed_location("L1", "Shelf").await;
    app.seed_location("L2", "Dock").await;

    let body = response_json(app.get("/movements/add").await).await;

    assert_eq!(body["products"][0]["name"], "Anvil");
    assert_eq!(body["products"][1]["name"], "Widget");
    assert_eq!(body["locations"][0]["name"], "Dock");
    assert_eq!(body["locations"][1]["name"], "Shelf");
}

#[tokio::test]
async fn post_records_and_redirects_to_list() {
    let app = TestApp::new().await;

    let response = app
        .post_form("/movements/add", "product_id=P1&qty=10&from_location=&to_location=L1")
        .await;
    assert_redirect(&response, "/movements");

    let cookie = notice_cookie(&response);
    let body = response_json(app.get_with_cookie("/movements", &cookie).await).await;
    assert_eq!(body["notice"]["message"], "Movement recorded");
    let movement = &body["movements"][0];
    assert_eq!(movement["product_id"], "P1");
    assert_eq!(movement["qty"], 10);
    assert!(movement["from_location"].is_null());
    assert_eq!(movement["to_location"], "L1");
}

#[tokio::test]
async fn post_with_bad_qty_goes_back_to_form() {
    let app = TestApp::new().await;

    for body in [
        "product_id=P1&qty=0&to_location=L1",
        "product_id=P1&qty=abc&to_location=L1",
        "product_id=P1&to_location=L1",
        "product_id=&qty=3&to_location=L1",
    ] {
        let response = app.post_form("/movements/add", body).await;
        assert_redirect(&response, "/movements/add");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let cookie = notice_cookie(&response);
        let form = response_json(app.get_with_cookie("/movements/add", &cookie).await).await;
        assert_eq!(form["notice"]["message"], "Product and positive qty required");
    }

    let list = response_json(app.get("/movements").await).await;
    assert!(list["movements"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn qty_above_the_limit_goes_back_to_form_and_report_still_works() {
    let app = TestApp::new().await;
    app.seed_product("P1", "Widget").await;
    app.seed_location("L1", "Dock").await;

    for qty in ["9223372036854775807", "1000000001"] {
        let response = app
            .post_form(
                "/movements/add",
                &format!("product_id=P1&qty={qty}&to_location=L1"),
            )
            .await;
        assert_redirect(&response, "/movements/add");

        let cookie = notice_cookie(&response);
        let form = response_json(app.get_with_cookie("/movements/add", &cookie).await).await;
        assert_eq!(form["notice"]["message"], "Qty must be at most 1000000000");
    }
    assert_eq!(app.movement_count().await, 0);

    let response = app
        .post_form(
            "/movements/add",
            "product_id=P1&qty=1000000000&to_location=L1",
        )
        .await;
    assert_redirect(&response, "/movements");
    app.seed_movement("P1", 1, None, Some("L1")).await;

    let report = app.get("/report").await;
    assert_eq!(report.status(), StatusCode::OK);
    let body = response_json(report).await;
    assert_eq!(body["grid"][0]["qty"], 1_000_000_001);
}
