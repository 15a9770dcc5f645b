//! Benchmark runner: packs synthetic jobs of increasing size and records
//! timing and material figures.

use crate::synthetic::SyntheticGenerator;
use instant::Instant;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Which packer a run exercised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackerKind {
    Sheets,
    Bars,
}

impl std::fmt::Display for PackerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackerKind::Sheets => write!(f, "sheets"),
            PackerKind::Bars => write!(f, "bars"),
        }
    }
}

/// Benchmark configuration.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Spec counts to generate, one job per entry.
    pub sizes: Vec<usize>,
    /// Runs per job; the reported time is the fastest run.
    pub runs_per_size: usize,
    /// Seed for the synthetic generator.
    pub seed: u64,
    /// Packers to exercise.
    pub packers: Vec<PackerKind>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10, 50, 200, 1000],
            runs_per_size: 3,
            seed: 42,
            packers: vec![PackerKind::Sheets, PackerKind::Bars],
        }
    }
}

impl BenchmarkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_runs_per_size(mut self, n: usize) -> Self {
        self.runs_per_size = n.max(1);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_packers(mut self, packers: Vec<PackerKind>) -> Self {
        self.packers = packers;
        self
    }
}

/// Result of benchmarking one job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    pub packer: PackerKind,
    /// Number of piece specs in the job.
    pub specs: usize,
    /// Number of piece units after quantity expansion.
    pub pieces: usize,
    /// Sheets or bars used.
    pub bins: usize,
    pub dropped: usize,
    /// Utilization (sheets) or efficiency (bars), in percent.
    pub utilization_percent: f64,
    /// Fastest wall time over all runs.
    pub time_ms: u64,
}

/// Collection of benchmark results.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub runs: Vec<RunResult>,
    pub version: String,
}

impl BenchmarkResult {
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Saves results to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Saves results to a CSV file.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        writeln!(
            file,
            "packer,specs,pieces,bins,dropped,utilization_percent,time_ms"
        )?;
        for run in &self.runs {
            writeln!(
                file,
                "{},{},{},{},{},{:.4},{}",
                run.packer,
                run.specs,
                run.pieces,
                run.bins,
                run.dropped,
                run.utilization_percent,
                run.time_ms
            )?;
        }
        Ok(())
    }

    /// Prints a summary table to stdout.
    pub fn print_summary(&self) {
        println!("\n{:=<72}", "");
        println!("BENCHMARK RESULTS");
        println!("{:=<72}", "");
        println!(
            "{:<8} {:>8} {:>8} {:>8} {:>8} {:>10} {:>10}",
            "Packer", "Specs", "Pieces", "Bins", "Dropped", "Util%", "Time(ms)"
        );
        println!("{:-<72}", "");
        for run in &self.runs {
            println!(
                "{:<8} {:>8} {:>8} {:>8} {:>8} {:>10.1} {:>10}",
                run.packer,
                run.specs,
                run.pieces,
                run.bins,
                run.dropped,
                run.utilization_percent,
                run.time_ms
            );
        }
        println!("{:=<72}\n", "");
    }
}

/// Runs the configured benchmark.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> stockcut::Result<BenchmarkResult> {
        let mut result = BenchmarkResult::new();
        let mut generator = SyntheticGenerator::with_seed(self.config.seed);

        for &packer in &self.config.packers {
            for &size in &self.config.sizes {
                log::info!("benchmarking {} packer with {} specs", packer, size);
                let run = match packer {
                    PackerKind::Sheets => self.run_sheets(&mut generator, size)?,
                    PackerKind::Bars => self.run_bars(&mut generator, size)?,
                };
                result.runs.push(run);
            }
        }
        Ok(result)
    }

    fn run_sheets(
        &self,
        generator: &mut SyntheticGenerator,
        size: usize,
    ) -> stockcut::Result<RunResult> {
        let job = generator.sheet_job(size);
        let mut best_ms = u64::MAX;
        let mut plan = job.run()?;
        for _ in 0..self.config.runs_per_size {
            let start = Instant::now();
            plan = job.run()?;
            best_ms = best_ms.min(start.elapsed().as_millis() as u64);
        }
        let summary = plan.sheet_summary();
        Ok(RunResult {
            packer: PackerKind::Sheets,
            specs: size,
            pieces: job.piece_count(),
            bins: summary.sheet_count,
            dropped: plan.dropped_count(),
            utilization_percent: summary.utilization_percent,
            time_ms: best_ms,
        })
    }

    fn run_bars(
        &self,
        generator: &mut SyntheticGenerator,
        size: usize,
    ) -> stockcut::Result<RunResult> {
        let job = generator.bar_job(size);
        let mut best_ms = u64::MAX;
        let mut plan = job.run()?;
        for _ in 0..self.config.runs_per_size {
            let start = Instant::now();
            plan = job.run()?;
            best_ms = best_ms.min(start.elapsed().as_millis() as u64);
        }
        let summary = plan.bar_summary();
        Ok(RunResult {
            packer: PackerKind::Bars,
            specs: size,
            pieces: job.piece_count(),
            bins: summary.bars_needed,
            dropped: plan.dropped_count(),
            utilization_percent: summary.efficiency_percent,
            time_ms: best_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_covers_all_sizes() {
        let config = BenchmarkConfig::new()
            .with_sizes(vec![5, 20])
            .with_runs_per_size(1)
            .with_seed(3);
        let result = BenchmarkRunner::new(config).run().unwrap();

        assert_eq!(result.runs.len(), 4);
        assert_eq!(result.runs[0].packer, PackerKind::Sheets);
        assert_eq!(result.runs[3].packer, PackerKind::Bars);
        for run in &result.runs {
            assert!(run.bins > 0);
            assert_eq!(run.dropped, 0);
            assert!(run.utilization_percent > 0.0 && run.utilization_percent <= 100.0);
        }
    }

    #[test]
    fn test_csv_output() {
        let mut result = BenchmarkResult::new();
        result.runs.push(RunResult {
            packer: PackerKind::Bars,
            specs: 10,
            pieces: 31,
            bins: 9,
            dropped: 0,
            utilization_percent: 91.25,
            time_ms: 0,
        });
        let path = std::env::temp_dir().join(format!("stockcut-bench-{}.csv", std::process::id()));
        result.save_csv(&path).unwrap();
        let csv = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "bars,10,31,9,0,91.2500,0");
    }
}
