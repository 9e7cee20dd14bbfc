//! Benchmark module
//! Sequential wall-clock timing of the four tasks

pub mod runner;
pub mod workloads;

pub use runner::{
    measure,
    platform_line,
    BenchmarkRunner,
    RunReport,
};
pub use workloads::{
    cpu_workload,
    file_payload,
    file_workload,
    json_dataset,
    json_workload,
    memory_workload,
};
