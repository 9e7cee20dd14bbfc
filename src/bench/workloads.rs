//! Workloads timed by the runner
//! Each one is a plain function so it can be tested and benched on its own

use std::path::Path;

use tokio::fs;

use crate::error::BenchError;
use crate::types::{JsonRecord, MemoryRecord, Nested};

/// Sum of `sqrt(i) * sin(i)` over `[0, n)`
pub fn cpu_workload(iterations: u64) -> f64 {
    let mut result = 0.0f64;
    for i in 0..iterations {
        let x = i as f64;
        result += x.sqrt() * x.sin();
    }
    result
}

/// Allocate `n` records, each with a freshly formatted string
pub fn memory_workload(iterations: u64) -> Vec<MemoryRecord> {
    let capacity = usize::try_from(iterations).unwrap_or(0);
    let mut records = Vec::with_capacity(capacity);
    for i in 0..iterations {
        records.push(MemoryRecord {
            index: i,
            value: format!("item{}", i),
        });
    }
    records
}

pub fn json_dataset(iterations: u64) -> Vec<JsonRecord> {
    (0..iterations)
        .map(|i| JsonRecord {
            id: i,
            value: format!("test{}", i),
            nested: Nested { x: i, y: i * 2 },
        })
        .collect()
}

/// Build the dataset, encode it to one string, decode it back
///
/// The decoded copy is returned unvalidated.
pub fn json_workload(iterations: u64) -> Result<Vec<JsonRecord>, BenchError> {
    let data = json_dataset(iterations);
    let serialized = serde_json::to_string(&data)?;
    let parsed: Vec<JsonRecord> = serde_json::from_str(&serialized)?;
    Ok(parsed)
}

pub fn file_payload(phrase: &str, repeats: usize) -> String {
    phrase.repeat(repeats)
}

/// Write, read back, then remove `path`
///
/// Returns the content that was read. Steps never overlap.
pub async fn file_workload(path: &Path, payload: &str) -> Result<String, BenchError> {
    fs::write(path, payload)
        .await
        .map_err(|source| BenchError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;

    let content = fs::read_to_string(path)
        .await
        .map_err(|source| BenchError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    fs::remove_file(path)
        .await
        .map_err(|source| BenchError::FileRemove {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(content)
}
