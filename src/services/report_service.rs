// src/services/report_service.rs

use std::collections::HashMap;

use sqlx::{Acquire, Sqlite};

use crate::{
    common::error::AppError,
    db::{LocationRepository, MovementRepository, ProductRepository},
    models::{
        location::Location, movement::ProductMovement, product::Product, report::BalanceEntry,
    },
};

/// Produtos e locais (ordenados por nome) junto com a grade de saldos.
#[derive(Debug, Clone)]
pub struct BalanceReport {
    pub products: Vec<Product>,
    pub locations: Vec<Location>,
    pub grid: Vec<BalanceEntry>,
}

#[derive(Clone, Default)]
pub struct ReportService {
    product_repo: ProductRepository,
    location_repo: LocationRepository,
    movement_repo: MovementRepository,
}

impl ReportService {
    pub fn new(
        product_repo: ProductRepository,
        location_repo: LocationRepository,
        movement_repo: MovementRepository,
    ) -> Self {
        Self {
            product_repo,
            location_repo,
            movement_repo,
        }
    }

    /// Calcula o saldo de cada par (produto, local) relendo o livro-razão.
    /// As três leituras rodam na mesma transação para enxergar um único estado.
    pub async fn compute_balance_grid<'e, E>(
        &self,
        executor: E,
    ) -> Result<BalanceReport, AppError>
    where
        E: Acquire<'e, Database = Sqlite>,
    {
        let mut tx = executor.begin().await?;

        let products = self.product_repo.list_by_name(&mut *tx).await?;
        let locations = self.location_repo.list_by_name(&mut *tx).await?;
        let movements = self.movement_repo.list_chronological(&mut *tx).await?;

        tx.commit().await?;

        let grid = replay_ledger(&products, &locations, &movements)?;
        tracing::debug!(
            products = products.len(),
            locations = locations.len(),
            movements = movements.len(),
            "Relatório de saldos calculado"
        );

        Ok(BalanceReport {
            products,
            locations,
            grid,
        })
    }
}

/// Soma o livro-razão: `to_location` recebe `+qty`, `from_location` perde `qty`.
/// A grade tem uma célula por produto x local (zeros inclusive), na ordem das
/// listas recebidas. Movimentações fora da grade são ignoradas e saldos
/// negativos são mantidos. Um saldo fora da faixa de `i64` vira
/// `AppError::BalanceOverflow`.
pub fn replay_ledger(
    products: &[Product],
    locations: &[Location],
    movements: &[ProductMovement],
) -> Result<Vec<BalanceEntry>, AppError> {
    let mut balances: HashMap<(&str, &str), i64> = HashMap::new();
    for product in products {
        for location in locations {
            balances.insert((product.product_id.as_str(), location.location_id.as_str()), 0);
        }
    }

    for movement in movements {
        let product_id = movement.product_id.as_str();

        if let Some(to) = movement.to_location.as_deref() {
            if let Some(balance) = balances.get_mut(&(product_id, to)) {
                *balance = balance
                    .checked_add(movement.qty)
                    .ok_or_else(|| overflow(product_id, to))?;
            }
        }
        if let Some(from) = movement.from_location.as_deref() {
            if let Some(balance) = balances.get_mut(&(product_id, from)) {
                *balance = balance
                    .checked_sub(movement.qty)
                    .ok_or_else(|| overflow(product_id, from))?;
            }
        }
    }

    let mut grid = Vec::with_capacity(products.len() * locations.len());
    for product in products {
        for location in locations {
            let qty = balances
                .get(&(product.product_id.as_str(), location.location_id.as_str()))
                .copied()
                .unwrap_or(0);
            grid.push(BalanceEntry {
                product: product.clone(),
                location: location.clone(),
                qty,
            });
        }
    }
    Ok(grid)
}

fn overflow(product_id: &str, location_id: &str) -> AppError {
    AppError::BalanceOverflow(product_id.to_string(), location_id.to_string())
}
