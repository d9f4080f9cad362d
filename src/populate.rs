//! Data population: creates and fills the `city` table both workloads query.
//!
//! Uses a fixed seed for deterministic, reproducible benchmark data. Seeding
//! runs once before any measurement and is never part of a timed probe.

use crate::workload::DbConfig;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rusqlite::{params, Connection};

/// Default row count, matching the canonical `world.city` table.
pub const CITY_ROWS: usize = 4079;

const COUNTRY_CODES: &[&str] = &[
    "ARG", "AUS", "BRA", "CAN", "CHN", "DEU", "EGY", "ESP", "FRA", "GBR",
    "IND", "ITA", "JPN", "KEN", "KOR", "MEX", "NGA", "NLD", "POL", "USA",
];

/// Drop and recreate the `city` table, then fill it with `rows` synthetic
/// rows inside a single transaction.
pub fn seed_city_table(config: &DbConfig, rows: usize) -> Result<()> {
    let mut conn = Connection::open(&config.path)?;
    conn.execute_batch(
        "DROP TABLE IF EXISTS city;
         CREATE TABLE city (
             id           INTEGER PRIMARY KEY,
             name         TEXT NOT NULL,
             country_code TEXT NOT NULL,
             district     TEXT NOT NULL,
             population   INTEGER NOT NULL
         );",
    )?;

    let mut rng = StdRng::seed_from_u64(0xC17E_5EED_0407_9000);
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO city (id, name, country_code, district, population)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for id in 1..=rows {
            let name = format!("city_{id:04}");
            let country_code = COUNTRY_CODES[rng.gen_range(0..COUNTRY_CODES.len())];
            let district = format!("district_{:02}", rng.gen_range(0..64));
            let population: i64 = rng.gen_range(5_000..10_000_000);
            stmt.execute(params![id as i64, name, country_code, district, population])?;
        }
    }
    tx.commit()?;

    Ok(())
}
