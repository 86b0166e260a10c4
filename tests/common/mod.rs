#![allow(dead_code)]

use axum::{
    body::{self, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use inventory_tracker::{
    build_router,
    config::{AppConfig, AppState},
};
use serde_json::Value;
use tower::ServiceExt;

/// Aplicação de teste com um SQLite em memória, novo a cada instância.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(AppConfig::in_memory()).await
    }

    pub async fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(config)
            .await
            .expect("failed to create in-memory database");
        let router = build_router(state.clone());
        Self { router, state }
    }

    /// Total de linhas do livro-razão, direto no banco.
    pub async fn movement_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM product_movement")
            .fetch_one(&self.state.db_pool)
            .await
            .expect("count movements")
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.send(Method::GET, uri, None, None).await
    }

    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> Response {
        self.send(Method::GET, uri, None, Some(cookie)).await
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> Response {
        self.send(Method::POST, uri, Some(body), None).await
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        form: Option<&str>,
        cookie: Option<&str>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if form.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        }
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = builder
            .body(Body::from(form.unwrap_or_default().to_string()))
            .expect("request");

        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router response")
    }

    // Atalhos para montar cenários pela camada de serviço.

    pub async fn seed_product(&self, id: &str, name: &str) {
        self.state
            .product_service
            .add_product(&self.state.db_pool, id, name)
            .await
            .expect("seed product");
    }

    pub async fn seed_location(&self, id: &str, name: &str) {
        self.state
            .location_service
            .add_location(&self.state.db_pool, id, name)
            .await
            .expect("seed location");
    }

    pub async fn seed_movement(
        &self,
        product: &str,
        qty: i64,
        from: Option<&str>,
        to: Option<&str>,
    ) {
        self.state
            .movement_service
            .record_movement(&self.state.db_pool, Some(product), Some(qty), from, to)
            .await
            .expect("seed movement");
    }
}

pub async fn response_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    serde_json::from_slice(&bytes).expect("json response")
}

pub fn location_header(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("location header")
}

/// Converte o `Set-Cookie` do aviso em um cabeçalho `Cookie` para a próxima requisição.
pub fn notice_cookie(response: &Response) -> String {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("notice="))
        .and_then(|v| v.split(';').next())
        .expect("notice cookie")
        .to_string()
}

pub fn assert_redirect(response: &Response, to: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_header(response), to);
}
