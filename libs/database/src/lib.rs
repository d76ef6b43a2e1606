//! PostgreSQL connectivity for the catalog services.
//!
//! # Features
//!
//! - `postgres` (default) - SeaORM connection pool, retrying connector, health check
//! - `config` - `core_config::FromEnv` for [`postgres::PostgresConfig`]
//!
//! ```ignore
//! use database::postgres::{PostgresConfig, connect_from_config_with_retry};
//! use core_config::FromEnv;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = connect_from_config_with_retry(config, None).await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
