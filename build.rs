//! Build script for the platform identifier
//! Captures the compiler version so the report can print it at runtime

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RUSTC");

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());

    let version = Command::new(&rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| {
            println!("cargo:warning=Could not query {} --version", rustc);
            "rustc (unknown version)".to_string()
        });

    println!("cargo:rustc-env=MICROBENCH_RUSTC_VERSION={}", version);
}
