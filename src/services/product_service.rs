// src/services/product_service.rs

use sqlx::{Acquire, Executor, Sqlite};
use validator::Validate;

use crate::{
    common::error::AppError,
    db::ProductRepository,
    models::product::{NewProduct, Product},
};

#[derive(Clone, Default)]
pub struct ProductService {
    product_repo: ProductRepository,
}

impl ProductService {
    pub fn new(product_repo: ProductRepository) -> Self {
        Self { product_repo }
    }

    /// Todos os produtos, por `product_id`.
    pub async fn list_products<'e, E>(&self, executor: E) -> Result<Vec<Product>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        self.product_repo.list_by_id(executor).await
    }

    /// Para os selects de formulários e para o relatório.
    pub async fn list_products_by_name<'e, E>(&self, executor: E) -> Result<Vec<Product>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        self.product_repo.list_by_name(executor).await
    }

    pub async fn get_product<'e, E>(
        &self,
        executor: E,
        product_id: &str,
    ) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        self.product_repo
            .find_by_id(executor, product_id)
            .await?
            .ok_or_else(|| AppError::ProductNotFound(product_id.to_string()))
    }

    // --- ADD PRODUCT ---
    pub async fn add_product<'e, E>(
        &self,
        executor: E,
        product_id: &str,
        name: &str,
    ) -> Result<Product, AppError>
    where
        E: Acquire<'e, Database = Sqlite>,
    {
        let input = NewProduct::new(product_id, name);
        input.validate()?;

        let mut tx = executor.begin().await?;

        // 1. Id já usado? (a PK continua sendo a garantia final)
        if self.product_repo.find_by_id(&mut *tx, &input.product_id).await?.is_some() {
            return Err(AppError::ProductAlreadyExists(input.product_id));
        }

        // 2. Grava
        let product = self
            .product_repo
            .create(&mut *tx, &input.product_id, &input.name)
            .await?;

        tx.commit().await?;

        tracing::info!(product_id = %product.product_id, "Produto criado");
        Ok(product)
    }

    // --- EDIT PRODUCT ---
    // Nome em branco é aceito na edição (só a criação exige nome).
    pub async fn edit_product<'e, E>(
        &self,
        executor: E,
        product_id: &str,
        new_name: &str,
    ) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let product = self
            .product_repo
            .update_name(executor, product_id, new_name.trim())
            .await?
            .ok_or_else(|| AppError::ProductNotFound(product_id.to_string()))?;

        tracing::info!(product_id = %product.product_id, "Produto atualizado");
        Ok(product)
    }

    // --- DELETE PRODUCT ---
    // Sem checagem de movimentações: as que apontam para o produto ficam órfãs.
    pub async fn delete_product<'e, E>(&self, executor: E, product_id: &str) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        if !self.product_repo.delete(executor, product_id).await? {
            return Err(AppError::ProductNotFound(product_id.to_string()));
        }

        tracing::info!(product_id, "Produto removido");
        Ok(())
    }
}
