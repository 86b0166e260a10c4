pub mod location_repo;
pub use location_repo::LocationRepository;
pub mod movement_repo;
pub use movement_repo::MovementRepository;
pub mod product_repo;
pub use product_repo::ProductRepository;

use std::{str::FromStr, time::Duration};

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

use crate::{common::error::AppError, config::AppConfig};

/// Abre a pool do SQLite conforme a configuração.
/// Um banco em memória vive só enquanto a conexão existe, então nesse caso
/// usamos uma única conexão que nunca é reciclada.
pub async fn connect(config: &AppConfig) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(config.enforce_foreign_keys);

    let in_memory = config.database_url.contains(":memory:");

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(3))
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");
    Ok(())
}

// SQLite reporta PRIMARY KEY e UNIQUE como violação de unicidade.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
