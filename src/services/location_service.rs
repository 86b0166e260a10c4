// src/services/location_service.rs

use sqlx::{Acquire, Executor, Sqlite};
use validator::Validate;

use crate::{
    common::error::AppError,
    db::LocationRepository,
    models::location::{Location, NewLocation},
};

#[derive(Clone, Default)]
pub struct LocationService {
    location_repo: LocationRepository,
}

impl LocationService {
    pub fn new(location_repo: LocationRepository) -> Self {
        Self { location_repo }
    }

    pub async fn list_locations<'e, E>(&self, executor: E) -> Result<Vec<Location>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        self.location_repo.list_by_id(executor).await
    }

    pub async fn list_locations_by_name<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<Location>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        self.location_repo.list_by_name(executor).await
    }

    pub async fn get_location<'e, E>(
        &self,
        executor: E,
        location_id: &str,
    ) -> Result<Location, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        self.location_repo
            .find_by_id(executor, location_id)
            .await?
            .ok_or_else(|| AppError::LocationNotFound(location_id.to_string()))
    }

    pub async fn add_location<'e, E>(
        &self,
        executor: E,
        location_id: &str,
        name: &str,
    ) -> Result<Location, AppError>
    where
        E: Acquire<'e, Database = Sqlite>,
    {
        let input = NewLocation::new(location_id, name);
        input.validate()?;

        let mut tx = executor.begin().await?;

        if self.location_repo.find_by_id(&mut *tx, &input.location_id).await?.is_some() {
            return Err(AppError::LocationAlreadyExists(input.location_id));
        }

        let location = self
            .location_repo
            .create(&mut *tx, &input.location_id, &input.name)
            .await?;

        tx.commit().await?;

        tracing::info!(location_id = %location.location_id, "Local criado");
        Ok(location)
    }

    pub async fn edit_location<'e, E>(
        &self,
        executor: E,
        location_id: &str,
        new_name: &str,
    ) -> Result<Location, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let location = self
            .location_repo
            .update_name(executor, location_id, new_name.trim())
            .await?
            .ok_or_else(|| AppError::LocationNotFound(location_id.to_string()))?;

        tracing::info!(location_id = %location.location_id, "Local atualizado");
        Ok(location)
    }

    /// Remove um local que nenhuma movimentação referencia.
    /// Verificação e remoção rodam na mesma transação.
    pub async fn delete_location<'e, E>(
        &self,
        executor: E,
        location_id: &str,
    ) -> Result<(), AppError>
    where
        E: Acquire<'e, Database = Sqlite>,
    {
        let mut tx = executor.begin().await?;

        // 1. Existe?
        if self.location_repo.find_by_id(&mut *tx, location_id).await?.is_none() {
            return Err(AppError::LocationNotFound(location_id.to_string()));
        }

        // 2. Está em uso como origem ou destino?
        if self.location_repo.is_referenced(&mut *tx, location_id).await? {
            return Err(AppError::LocationInUse(location_id.to_string()));
        }

        // 3. Remove
        self.location_repo.delete(&mut *tx, location_id).await?;

        tx.commit().await?;

        tracing::info!(location_id, "Local removido");
        Ok(())
    }
}
