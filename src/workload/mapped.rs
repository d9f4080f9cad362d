//! Mapped-entity workload: sqlx `query_as` materializing every row of the
//! result set as a typed [`City`].

use super::{DbConfig, FailureMode, Workload, CITY_QUERY};
use anyhow::Result;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};
use tokio::runtime::{Builder, Runtime};

/// One row of the `city` table materialized as a typed entity.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub country_code: String,
    pub district: String,
    pub population: i64,
}

/// Probes the `city` table through sqlx's mapped-entity query path.
///
/// Failures propagate out of [`Workload::run`] and abort the benchmark.
pub struct MappedEntityWorkload {
    config: DbConfig,
    runtime: Runtime,
}

impl MappedEntityWorkload {
    pub fn new(config: DbConfig) -> Result<Self> {
        // The runtime only ever blocks on this workload's own probe; nothing
        // is spawned and no two probes overlap.
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { config, runtime })
    }

    /// One probe: connect, materialize all matching cities, close.
    ///
    /// Returns the number of rows materialized (for verification).
    pub fn probe(&self) -> Result<usize> {
        let cities = self.runtime.block_on(self.fetch_all_cities())?;
        Ok(cities.len())
    }

    async fn fetch_all_cities(&self) -> Result<Vec<City>> {
        let mut conn = SqliteConnectOptions::new()
            .filename(&self.config.path)
            .connect()
            .await?;
        let cities = sqlx::query_as::<_, City>(CITY_QUERY)
            .fetch_all(&mut conn)
            .await?;
        conn.close().await?;
        Ok(cities)
    }
}

impl Workload for MappedEntityWorkload {
    fn label(&self) -> &str {
        "Mapped entities (sqlx)"
    }

    fn failure_mode(&self) -> FailureMode {
        FailureMode::Propagate
    }

    fn run(&mut self) -> Result<()> {
        self.probe()?;
        Ok(())
    }
}
