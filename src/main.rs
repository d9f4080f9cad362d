//! No-argument benchmark runner.
//!
//! Seeds the shared SQLite database, runs the raw and mapped workloads
//! through the driver, and prints the three report lines to stdout. Progress
//! and failures go to stderr through the logger.
//!
//! The database path defaults to a file in the system temp directory and can
//! be overridden with `QUERY_BENCH_DB` (also read from a `.env` file).

use log::LevelFilter;
use std::process;

use query_bench::driver::run_comparison;
use query_bench::populate::{seed_city_table, CITY_ROWS};
use query_bench::report::{print_report, Report};
use query_bench::workload::mapped::MappedEntityWorkload;
use query_bench::workload::raw::RawSqlWorkload;
use query_bench::workload::{DbConfig, Workload};

/// Probes per workload per run. Compile-time positive constant; the mean
/// divides by it.
const ITERATIONS: u32 = 5;

fn main() {
    dotenvy::dotenv().ok();

    query_bench::initialize_logger(LevelFilter::Info).unwrap_or_else(|e| {
        eprintln!("Failed to initialize logger: {e}. Exiting.");
        process::exit(1);
    });

    let config = DbConfig::from_env();
    log::info!("Benchmark database: {}", config.path.display());

    if let Err(e) = seed_city_table(&config, CITY_ROWS) {
        log::error!("Failed to seed benchmark database: {e:#}. Exiting.");
        process::exit(1);
    }
    log::info!("Seeded {CITY_ROWS} city rows");

    let mut raw = RawSqlWorkload::new(config.clone());
    let mut mapped = match MappedEntityWorkload::new(config) {
        Ok(workload) => workload,
        Err(e) => {
            log::error!("Failed to construct mapped workload: {e:#}. Exiting.");
            process::exit(1);
        }
    };

    log::info!(
        "Workloads: {} (on failure: {:?}), {} (on failure: {:?})",
        raw.label(),
        raw.failure_mode(),
        mapped.label(),
        mapped.failure_mode()
    );
    log::info!("Running {ITERATIONS} iterations per workload");
    let outcome = match run_comparison(ITERATIONS, &mut raw, &mut mapped) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("Benchmark run aborted: {e:#}");
            process::exit(1);
        }
    };

    print_report(&Report::from_outcome(&outcome));
}
