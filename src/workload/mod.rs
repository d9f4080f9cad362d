//! Workload definitions and the common [`Workload`] trait.
//!
//! Two implementations are provided:
//! - [`raw::RawSqlWorkload`] — rusqlite prepared statement, rows decoded by hand
//! - [`mapped::MappedEntityWorkload`] — sqlx `query_as` into a typed entity

pub mod mapped;
pub mod raw;

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// The read-only query both workloads execute. Same shape as the classic
/// `world.city` table.
pub const CITY_QUERY: &str = "SELECT id, name, country_code, district, population FROM city";

/// How a workload responds to failures from its data source. Part of the
/// contract, so the driver's caller can see which policy applies instead of
/// discovering it from behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Errors are handled inside [`Workload::run`]: logged and swallowed, the
    /// probe reports success and its (fast) duration is still recorded.
    RecoverLocally,
    /// Errors escape [`Workload::run`] and abort the whole benchmark.
    Propagate,
}

/// One measurable probe against the benchmark database.
pub trait Workload {
    /// Name used in the report lines.
    fn label(&self) -> &str;

    /// Declared failure-recovery policy.
    fn failure_mode(&self) -> FailureMode;

    /// Execute one probe: acquire a connection, run the query, drain every
    /// row, release the connection. Release happens on every exit path,
    /// including failure.
    fn run(&mut self) -> Result<()>;
}

/// Where the benchmark database lives. Built once in `main` and handed to
/// each workload at construction time.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub path: PathBuf,
}

impl DbConfig {
    /// Resolve from the `QUERY_BENCH_DB` environment variable, falling back
    /// to a file in the system temp directory.
    pub fn from_env() -> Self {
        let path = env::var_os("QUERY_BENCH_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join("query-bench.db"));
        Self { path }
    }
}
