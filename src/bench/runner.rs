//! Sequential benchmark runner
//! Times each task once, in fixed order, and reports to a text sink

use std::hint::black_box;
use std::io::{self, Write};
use std::time::Instant;

use tracing::{debug, error, info, warn};

use crate::bench::workloads::{
    cpu_workload, file_payload, file_workload, json_workload, memory_workload,
};
use crate::config::BenchConfig;
use crate::types::{TaskFailure, TaskKind, TimingSample};

/// What one run printed and logged
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub samples: Vec<TimingSample>,
    pub failures: Vec<TaskFailure>,
    /// Set only when the whole sequence completed
    pub total_ms: Option<f64>,
}

impl RunReport {
    pub fn sample(&self, task: TaskKind) -> Option<&TimingSample> {
        self.samples.iter().find(|s| s.task == task)
    }
}

/// Time a synchronous closure, returning its output and elapsed milliseconds
pub fn measure<T, F>(f: F) -> (T, f64)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let out = black_box(f());
    (out, elapsed_ms(start))
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Identifier printed under the banner
pub fn platform_line() -> String {
    format!(
        "Platform: {} ({}/{}, {} cpus)",
        env!("MICROBENCH_RUSTC_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH,
        num_cpus::get()
    )
}

pub struct BenchmarkRunner {
    config: BenchConfig,
}

impl BenchmarkRunner {
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Run every task and print the report to stdout
    pub async fn run(&self) {
        let mut stdout = io::stdout();
        self.run_with(&mut stdout).await;
    }

    /// Run every task, writing the report into `out`
    ///
    /// Never fails: a fault escaping the sequence is logged and recorded in
    /// the returned report.
    pub async fn run_with<W: Write>(&self, out: &mut W) -> RunReport {
        let mut report = RunReport::default();

        match self.run_sequence(out, &mut report).await {
            Ok(started) => {
                let total = elapsed_ms(started);
                report.total_ms = Some(total);
                if let Err(e) = writeln!(out, "Total Execution Time: {:.2}ms", total) {
                    warn!("Failed to write total line: {}", e);
                }
                info!(total_ms = total, "Benchmarks complete");
            }
            Err(e) => {
                error!("Benchmark run failed: {:#}", e);
                report.failures.push(TaskFailure {
                    task: None,
                    message: format!("{:#}", e),
                });
            }
        }

        report
    }

    /// Returns the instant the total timer started, right after the header
    async fn run_sequence<W: Write>(
        &self,
        out: &mut W,
        report: &mut RunReport,
    ) -> anyhow::Result<Instant> {
        let n = self.config.iterations;

        writeln!(out, "Starting benchmarks...")?;
        writeln!(out, "===================")?;
        writeln!(out, "{}", platform_line())?;
        let started = Instant::now();

        // CPU
        let (total, ms) = measure(|| cpu_workload(n));
        debug!(result = total, "CPU task done");
        self.emit(out, report, TaskKind::Cpu, n, ms)?;

        // Memory
        let (records, ms) = measure(|| memory_workload(n));
        drop(records);
        self.emit(out, report, TaskKind::Memory, n, ms)?;

        // File
        let start = Instant::now();
        let payload = file_payload(&self.config.payload_phrase, self.config.payload_repeats);
        match file_workload(&self.config.file_path, &payload).await {
            Ok(content) => {
                let ms = elapsed_ms(start);
                debug!(bytes = content.len(), "File task read back");
                self.emit(out, report, TaskKind::File, self.config.payload_repeats as u64, ms)?;
            }
            Err(e) => {
                error!(path = %self.config.file_path.display(), "File operations error: {}", e);
                report.failures.push(TaskFailure {
                    task: Some(TaskKind::File),
                    message: e.to_string(),
                });
            }
        }

        // JSON
        let (parsed, ms) = measure(|| json_workload(n));
        let parsed = parsed?;
        drop(parsed);
        self.emit(out, report, TaskKind::Json, n, ms)?;

        Ok(started)
    }

    fn emit<W: Write>(
        &self,
        out: &mut W,
        report: &mut RunReport,
        task: TaskKind,
        workload: u64,
        duration_ms: f64,
    ) -> io::Result<()> {
        let sample = TimingSample {
            task,
            workload,
            duration_ms,
        };
        debug!(task = task.label(), duration_ms, "Task timed");
        writeln!(out, "{}", sample)?;
        report.samples.push(sample);
        Ok(())
    }
}
