// src/db/movement_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite};

use crate::{common::error::AppError, models::movement::ProductMovement};

// Quantas movimentações a listagem mostra.
pub const RECENT_MOVEMENTS_LIMIT: i64 = 200;

const MOVEMENT_COLUMNS: &str =
    "movement_id, timestamp, from_location, to_location, product_id, qty";

#[derive(Clone, Default)]
pub struct MovementRepository;

impl MovementRepository {
    pub fn new() -> Self {
        Self
    }

    /// As mais recentes primeiro; empate no timestamp desempata pelo id.
    pub async fn list_recent<'e, E>(
        &self,
        executor: E,
        limit: i64,
    ) -> Result<Vec<ProductMovement>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let sql = format!(
            "SELECT {MOVEMENT_COLUMNS} FROM product_movement \
             ORDER BY timestamp DESC, movement_id DESC LIMIT ?1"
        );
        let movements = sqlx::query_as::<_, ProductMovement>(&sql)
            .bind(limit)
            .fetch_all(executor)
            .await?;
        Ok(movements)
    }

    /// O livro-razão completo, em ordem cronológica.
    pub async fn list_chronological<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<ProductMovement>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let sql = format!(
            "SELECT {MOVEMENT_COLUMNS} FROM product_movement \
             ORDER BY timestamp ASC, movement_id ASC"
        );
        let movements = sqlx::query_as::<_, ProductMovement>(&sql)
            .fetch_all(executor)
            .await?;
        Ok(movements)
    }

    /// Grava uma movimentação no livro-razão.
    pub async fn record<'e, E>(
        &self,
        executor: E,
        timestamp: DateTime<Utc>,
        product_id: &str,
        qty: i64,
        from_location: Option<&str>,
        to_location: Option<&str>,
    ) -> Result<ProductMovement, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let sql = format!(
            "INSERT INTO product_movement (timestamp, from_location, to_location, product_id, qty) \
             VALUES (?1, ?2, ?3, ?4, ?5) RETURNING {MOVEMENT_COLUMNS}"
        );
        let movement = sqlx::query_as::<_, ProductMovement>(&sql)
            .bind(timestamp)
            .bind(from_location)
            .bind(to_location)
            .bind(product_id)
            .bind(qty)
            .fetch_one(executor)
            .await?;
        Ok(movement)
    }
}
