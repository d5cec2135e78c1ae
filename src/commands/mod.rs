//! Command implementations

pub mod benchmark;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::{Command, parse_command, run_simple};
