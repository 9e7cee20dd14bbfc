//! Configuration module

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Workload settings
    pub bench: BenchConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Workload description handed to every task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Loop bound and record count (N)
    pub iterations: u64,
    /// Scratch file used by the file task, relative to the working directory
    pub file_path: PathBuf,
    pub payload_phrase: String,
    pub payload_repeats: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub json_output: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            file_path: PathBuf::from("test.txt"),
            payload_phrase: "Hello World".to_string(),
            payload_repeats: 1000,
        }
    }
}

impl BenchConfig {
    /// Default workload with a different N
    pub fn with_iterations(iterations: u64) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    /// Point the file task somewhere else
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_output: false,
        }
    }
}

impl Config {
    /// Load config from environment
    ///
    /// Only diagnostics are read here. The workload is fixed at
    /// `BenchConfig::default()`.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let json_output = std::env::var("MICROBENCH_LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            bench: BenchConfig::default(),
            logging: LoggingConfig { level, json_output },
        }
    }
}
