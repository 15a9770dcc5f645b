//! Command-line support for stockcut.
//!
//! This crate provides:
//! - JSON/TOML job files for sheet and bar cutting
//! - Serializable plan reports
//! - A seeded synthetic job generator
//! - A benchmark runner with JSON/CSV output

mod job;
mod report;
mod runner;
mod synthetic;

pub use job::{load_job, save_job, BarJob, JobFormat, SheetJob};
pub use report::{BarPlanReport, BarReport, PlacementReport, SheetPlanReport, SheetReport};
pub use runner::{BenchmarkConfig, BenchmarkResult, BenchmarkRunner, PackerKind, RunResult};
pub use synthetic::{SyntheticGenerator, DEFAULT_BAR, DEFAULT_SHEET};
