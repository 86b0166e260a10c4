// src/config.rs

use anyhow::Context;
use sqlx::SqlitePool;
use std::env;

use crate::{
    common::i18n::I18nStore,
    db::{self, LocationRepository, MovementRepository, ProductRepository},
    services::{LocationService, MovementService, ProductService, ReportService},
};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://inventory.db?mode=rwc";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    // Desligado por padrão: referências a ids inexistentes são aceitas
    pub enforce_foreign_keys: bool,
}

impl AppConfig {
    /// Lê a configuração das variáveis de ambiente (e do `.env`, se existir).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS inválido: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let enforce_foreign_keys = match lookup("ENFORCE_FOREIGN_KEYS") {
            Some(raw) => parse_flag(&raw)
                .with_context(|| format!("ENFORCE_FOREIGN_KEYS inválido: {raw}"))?,
            None => false,
        };

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            enforce_foreign_keys,
        })
    }

    /// Banco em memória, usado nos testes.
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
            max_connections: 1,
            enforce_foreign_keys: false,
        }
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("valor booleano desconhecido: {other}"),
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub config: AppConfig,
    pub i18n_store: I18nStore,
    pub product_service: ProductService,
    pub location_service: LocationService,
    pub movement_service: MovementService,
    pub report_service: ReportService,
}

impl AppState {
    /// Conecta, roda as migrações e monta o gráfico de dependências.
    pub async fn new(config: AppConfig) -> anyhow::Result<Self> {
        let db_pool = db::connect(&config)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        db::run_migrations(&db_pool)
            .await
            .context("Falha ao rodar as migrações do banco de dados")?;

        Ok(Self::with_pool(db_pool, config))
    }

    pub fn with_pool(db_pool: SqlitePool, config: AppConfig) -> Self {
        let product_repo = ProductRepository::new();
        let location_repo = LocationRepository::new();
        let movement_repo = MovementRepository::new();

        Self {
            db_pool,
            config,
            i18n_store: I18nStore::new(),
            product_service: ProductService::new(product_repo.clone()),
            location_service: LocationService::new(location_repo.clone()),
            movement_service: MovementService::new(movement_repo.clone()),
            report_service: ReportService::new(product_repo, location_repo, movement_repo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(!config.enforce_foreign_keys);
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite://other.db"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("ENFORCE_FOREIGN_KEYS", "on"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite://other.db");
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.max_connections, 12);
        assert!(config.enforce_foreign_keys);
    }

    #[test]
    fn rejects_malformed_values() {
        let bad_pool = lookup_from(&[("DATABASE_MAX_CONNECTIONS", "many")]);
        assert!(AppConfig::from_lookup(bad_pool).is_err());

        let bad_flag = lookup_from(&[("ENFORCE_FOREIGN_KEYS", "maybe")]);
        assert!(AppConfig::from_lookup(bad_flag).is_err());
    }
}
