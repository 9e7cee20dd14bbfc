//! Core types for the benchmark runner

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four timed tasks, in run order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Cpu,
    Memory,
    File,
    Json,
}

impl TaskKind {
    pub const ALL: [TaskKind; 4] = [
        TaskKind::Cpu,
        TaskKind::Memory,
        TaskKind::File,
        TaskKind::Json,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::Cpu => "CPU Test",
            TaskKind::Memory => "Memory Test",
            TaskKind::File => "File Operations Test",
            TaskKind::Json => "JSON Operations Test",
        }
    }

    /// Unit of the workload count shown next to the label
    pub fn unit(&self) -> &'static str {
        match self {
            TaskKind::Cpu => "iterations",
            TaskKind::Memory => "items",
            TaskKind::File => "repeats",
            TaskKind::Json => "records",
        }
    }
}

/// One task's elapsed time
#[derive(Debug, Clone)]
pub struct TimingSample {
    pub task: TaskKind,
    pub workload: u64,
    pub duration_ms: f64,
}

impl fmt::Display for TimingSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {}): {:.2}ms",
            self.task.label(),
            self.workload,
            self.task.unit(),
            self.duration_ms
        )
    }
}

/// A task that logged an error instead of printing its timing
#[derive(Debug, Clone)]
pub struct TaskFailure {
    /// `None` when the fault escaped the task sequence itself
    pub task: Option<TaskKind>,
    pub message: String,
}

/// Memory test record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRecord {
    pub index: u64,
    pub value: String,
}

/// JSON test record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonRecord {
    pub id: u64,
    pub value: String,
    pub nested: Nested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nested {
    pub x: u64,
    pub y: u64,
}
