//! Microbench Core
//!
//! Times four unrelated operations once each and prints elapsed milliseconds.
//!
//! ## Tasks
//! - CPU: floating-point loop (`sqrt(i) * sin(i)`)
//! - Memory: allocation of N formatted records
//! - File: write, read back and remove one scratch file
//! - JSON: encode and decode N nested records

pub mod bench;
pub mod config;
pub mod error;
pub mod types;

pub use bench::{BenchmarkRunner, RunReport};
pub use config::{BenchConfig, Config, LoggingConfig};
pub use error::BenchError;
pub use types::{JsonRecord, MemoryRecord, Nested, TaskFailure, TaskKind, TimingSample};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// Logs go to stderr so stdout carries only the report.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if config.json_output {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}
