// src/db/product_repo.rs

use sqlx::{Executor, Sqlite};

use crate::{common::error::AppError, db::is_unique_violation, models::product::Product};

// Acesso à tabela 'product'. Todas as funções aceitam um executor
// (pool, conexão ou transação).
#[derive(Clone, Default)]
pub struct ProductRepository;

impl ProductRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn list_by_id<'e, E>(&self, executor: E) -> Result<Vec<Product>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let products = sqlx::query_as::<_, Product>(
            "SELECT product_id, name FROM product ORDER BY product_id ASC",
        )
        .fetch_all(executor)
        .await?;
        Ok(products)
    }

    pub async fn list_by_name<'e, E>(&self, executor: E) -> Result<Vec<Product>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let products = sqlx::query_as::<_, Product>(
            "SELECT product_id, name FROM product ORDER BY name ASC, product_id ASC",
        )
        .fetch_all(executor)
        .await?;
        Ok(products)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        product_id: &str,
    ) -> Result<Option<Product>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let product = sqlx::query_as::<_, Product>(
            "SELECT product_id, name FROM product WHERE product_id = ?1",
        )
        .bind(product_id)
        .fetch_optional(executor)
        .await?;
        Ok(product)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        product_id: &str,
        name: &str,
    ) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Product>(
            "INSERT INTO product (product_id, name) VALUES (?1, ?2) RETURNING product_id, name",
        )
        .bind(product_id)
        .bind(name)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                return AppError::ProductAlreadyExists(product_id.to_string());
            }
            e.into()
        })
    }

    /// Atualiza só o nome. Devolve None se o id não existir.
    pub async fn update_name<'e, E>(
        &self,
        executor: E,
        product_id: &str,
        name: &str,
    ) -> Result<Option<Product>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let product = sqlx::query_as::<_, Product>(
            "UPDATE product SET name = ?2 WHERE product_id = ?1 RETURNING product_id, name",
        )
        .bind(product_id)
        .bind(name)
        .fetch_optional(executor)
        .await?;
        Ok(product)
    }

    /// Devolve `true` se alguma linha foi apagada.
    pub async fn delete<'e, E>(&self, executor: E, product_id: &str) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM product WHERE product_id = ?1")
            .bind(product_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
