//! Microbench CLI
//! Runs the CPU, memory, file and JSON tasks once each

use microbench::{init_logging, BenchmarkRunner, Config};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging)?;

    info!(iterations = config.bench.iterations, "Running benchmarks");

    let runner = BenchmarkRunner::new(config.bench);
    runner.run().await;

    Ok(())
}
