use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use microbench::{BenchConfig, BenchmarkRunner, TaskKind};
use tracing_subscriber::fmt::MakeWriter;

/// Shared buffer collecting formatted log lines
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn run_to_string(config: BenchConfig) -> (String, microbench::RunReport) {
    let runner = BenchmarkRunner::new(config);
    let mut out = Vec::new();
    let report = tokio_test::block_on(runner.run_with(&mut out));
    (String::from_utf8(out).expect("utf8 output"), report)
}

fn count_prefix(text: &str, prefix: &str) -> usize {
    text.lines().filter(|l| l.starts_with(prefix)).count()
}

#[test]
fn test_all_tasks_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.txt");
    let config = BenchConfig::with_iterations(5).with_file_path(&path);

    let (text, report) = run_to_string(config);

    let positions: Vec<usize> = TaskKind::ALL
        .iter()
        .map(|t| text.find(t.label()).expect("label present"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    for task in TaskKind::ALL {
        assert_eq!(count_prefix(&text, task.label()), 1);
    }
    assert_eq!(count_prefix(&text, "Total Execution Time: "), 1);
    assert!(text.lines().last().unwrap().starts_with("Total Execution Time: "));

    assert!(report.failures.is_empty());
    assert!(!path.exists());
}

#[test]
fn test_durations_parse_non_negative() {
    let dir = tempfile::tempdir().unwrap();
    let config = BenchConfig::with_iterations(50).with_file_path(dir.path().join("test.txt"));

    let (text, _) = run_to_string(config);

    let timed: Vec<&str> = text.lines().filter(|l| l.ends_with("ms")).collect();
    assert_eq!(timed.len(), 5);
    for line in timed {
        let value = line
            .rsplit(": ")
            .next()
            .and_then(|v| v.strip_suffix("ms"))
            .expect("duration suffix");
        let ms: f64 = value.parse().expect("numeric duration");
        assert!(ms >= 0.0, "negative duration in {:?}", line);
        let decimals = value.split('.').nth(1).map(str::len);
        assert_eq!(decimals, Some(2));
    }
}

#[test]
fn test_file_failure_skips_only_file_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("test.txt");
    let config = BenchConfig::with_iterations(5).with_file_path(&path);

    let (text, report) = run_to_string(config);

    assert_eq!(count_prefix(&text, TaskKind::Cpu.label()), 1);
    assert_eq!(count_prefix(&text, TaskKind::Memory.label()), 1);
    assert_eq!(count_prefix(&text, TaskKind::File.label()), 0);
    assert_eq!(count_prefix(&text, TaskKind::Json.label()), 1);
    assert_eq!(count_prefix(&text, "Total Execution Time: "), 1);

    assert_eq!(report.failures.len(), 1);
    let failure = &report.failures[0];
    assert_eq!(failure.task, Some(TaskKind::File));
    assert!(failure.message.contains("failed to write"));
    assert!(failure.message.contains("test.txt"));
    assert!(report.sample(TaskKind::File).is_none());
    assert!(report.total_ms.is_some());
}

#[test]
fn test_file_failure_logs_one_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("test.txt");
    let config = BenchConfig::with_iterations(5).with_file_path(&path);

    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::ERROR)
        .finish();

    let (text, report) = tracing::subscriber::with_default(subscriber, || run_to_string(config));

    let logged = logs.contents();
    let errors: Vec<&str> = logged.lines().filter(|l| l.contains("ERROR")).collect();
    assert_eq!(errors.len(), 1, "unexpected logs:\n{}", logged);
    assert!(errors[0].contains("File operations error"));
    assert!(errors[0].contains("no_such_dir"));

    assert_eq!(count_prefix(&text, TaskKind::File.label()), 0);
    assert_eq!(report.failures.len(), 1);
}
