// src/db/location_repo.rs

use sqlx::{Executor, Sqlite};

use crate::{common::error::AppError, db::is_unique_violation, models::location::Location};

#[derive(Clone, Default)]
pub struct LocationRepository;

impl LocationRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn list_by_id<'e, E>(&self, executor: E) -> Result<Vec<Location>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let locations = sqlx::query_as::<_, Location>(
            "SELECT location_id, name FROM location ORDER BY location_id ASC",
        )
        .fetch_all(executor)
        .await?;
        Ok(locations)
    }

    pub async fn list_by_name<'e, E>(&self, executor: E) -> Result<Vec<Location>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let locations = sqlx::query_as::<_, Location>(
            "SELECT location_id, name FROM location ORDER BY name ASC, location_id ASC",
        )
        .fetch_all(executor)
        .await?;
        Ok(locations)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        location_id: &str,
    ) -> Result<Option<Location>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let location = sqlx::query_as::<_, Location>(
            "SELECT location_id, name FROM location WHERE location_id = ?1",
        )
        .bind(location_id)
        .fetch_optional(executor)
        .await?;
        Ok(location)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        location_id: &str,
        name: &str,
    ) -> Result<Location, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Location>(
            "INSERT INTO location (location_id, name) VALUES (?1, ?2) RETURNING location_id, name",
        )
        .bind(location_id)
        .bind(name)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                return AppError::LocationAlreadyExists(location_id.to_string());
            }
            e.into()
        })
    }

    pub async fn update_name<'e, E>(
        &self,
        executor: E,
        location_id: &str,
        name: &str,
    ) -> Result<Option<Location>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let location = sqlx::query_as::<_, Location>(
            "UPDATE location SET name = ?2 WHERE location_id = ?1 RETURNING location_id, name",
        )
        .bind(location_id)
        .bind(name)
        .fetch_optional(executor)
        .await?;
        Ok(location)
    }

    /// Verifica se alguma movimentação usa o local como origem ou destino.
    /// SELECT EXISTS para parar na primeira linha encontrada.
    pub async fn is_referenced<'e, E>(
        &self,
        executor: E,
        location_id: &str,
    ) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let exists: i64 = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM product_movement
                WHERE from_location = ?1 OR to_location = ?1
            )
            "#,
        )
        .bind(location_id)
        .fetch_one(executor)
        .await?;
        Ok(exists != 0)
    }

    pub async fn delete<'e, E>(&self, executor: E, location_id: &str) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM location WHERE location_id = ?1")
            .bind(location_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
