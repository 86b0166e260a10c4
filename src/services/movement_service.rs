// src/services/movement_service.rs

use chrono::Utc;
use sqlx::{Executor, Sqlite};
use validator::Validate;

use crate::{
    common::error::AppError,
    db::{movement_repo::RECENT_MOVEMENTS_LIMIT, MovementRepository},
    models::movement::{NewMovement, ProductMovement},
};

#[derive(Clone, Default)]
pub struct MovementService {
    movement_repo: MovementRepository,
}

impl MovementService {
    pub fn new(movement_repo: MovementRepository) -> Self {
        Self { movement_repo }
    }

    /// As últimas 200 movimentações, mais recentes primeiro.
    pub async fn list_recent_movements<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<ProductMovement>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        self.movement_repo
            .list_recent(executor, RECENT_MOVEMENTS_LIMIT)
            .await
    }

    /// Registra uma movimentação. Os ids de produto e locais não são
    /// conferidos aqui: só as chaves estrangeiras do banco (se ligadas) barram
    /// referências inválidas.
    pub async fn record_movement<'e, E>(
        &self,
        executor: E,
        product_id: Option<&str>,
        qty: Option<i64>,
        from_location: Option<&str>,
        to_location: Option<&str>,
    ) -> Result<ProductMovement, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let input = NewMovement::new(product_id, qty, from_location, to_location);
        input.validate()?;

        let (Some(product_id), Some(qty)) = (input.product_id.as_deref(), input.qty) else {
            // validate() já garante os dois campos
            return Err(AppError::InternalServerError(anyhow::anyhow!(
                "movimentação validada sem produto ou quantidade"
            )));
        };

        let movement = self
            .movement_repo
            .record(
                executor,
                Utc::now(),
                product_id,
                qty,
                input.from_location.as_deref(),
                input.to_location.as_deref(),
            )
            .await?;

        tracing::info!(
            movement_id = movement.movement_id,
            product_id = %movement.product_id,
            qty = movement.qty,
            "Movimentação registrada"
        );
        Ok(movement)
    }
}
