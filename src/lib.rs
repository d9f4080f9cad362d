//! Raw SQL vs Mapped-Entity Query Latency Benchmark
//!
//! Times the same read-only query through two database stacks against one
//! shared SQLite file:
//! - **raw**: a rusqlite prepared statement with every row decoded by hand
//! - **mapped**: sqlx `query_as` materializing a typed [`City`] per row
//!
//! Each probe opens its own connection, drains the full result set, and
//! releases the connection. The driver runs both probes a fixed number of
//! times, always raw before mapped within an iteration, and reports the
//! integer-nanosecond mean per stack plus their signed difference.
//!
//! Run benchmark: `cargo run --release`
//! Run tests: `cargo test`
//! Criterion benches: `cargo bench`
//!
//! [`City`]: workload::mapped::City

use log::{LevelFilter, SetLoggerError};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

pub mod driver;
pub mod harness;
pub mod populate;
pub mod report;
pub mod workload;

/// Route `log` output to stderr; stdout is reserved for the report lines.
pub fn initialize_logger(log_level: LevelFilter) -> Result<(), SetLoggerError> {
    const LOGGING_PATTERN: &str = "{d} {l} {f}:{L} - {m}\n";

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOGGING_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(log_level))
        .unwrap();

    let _handle = log4rs::init_config(config)?;

    Ok(())
}
