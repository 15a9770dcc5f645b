//! stockcut command-line interface.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stockcut_cli::{
    load_job, save_job, BarJob, BarPlanReport, BenchmarkConfig, BenchmarkRunner, PackerKind,
    SheetJob, SheetPlanReport, SyntheticGenerator,
};

#[derive(Parser)]
#[command(name = "stockcut")]
#[command(about = "Cutting plans for sheet and bar stock")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack rectangular pieces onto stock sheets
    Sheets {
        /// Job file (.json or .toml)
        job: PathBuf,

        /// Override the job's spacing
        #[arg(short, long)]
        spacing: Option<f64>,

        /// Write the plan report as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Cut segments from stock bars
    Bars {
        /// Job file (.json or .toml)
        job: PathBuf,

        /// Override the job's kerf
        #[arg(short, long)]
        kerf: Option<f64>,

        /// Write the plan report as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a synthetic job file
    Generate {
        /// Kind of job to generate
        #[arg(value_enum)]
        kind: JobKind,

        /// Number of piece specs
        #[arg(short = 'n', long, default_value = "20")]
        specs: usize,

        /// Random seed for reproducibility
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Output file (.json or .toml)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Benchmark the packers on synthetic jobs
    Bench {
        /// Spec counts to benchmark
        #[arg(long, value_delimiter = ',', default_values_t = vec![10, 50, 200, 1000])]
        sizes: Vec<usize>,

        /// Runs per size
        #[arg(short, long, default_value = "3")]
        runs: usize,

        /// Random seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Restrict to one packer
        #[arg(short, long, value_enum)]
        packer: Option<JobKind>,

        /// Output file for results (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for CSV results
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum JobKind {
    /// Sheet cutting
    Sheets,
    /// Bar cutting
    Bars,
}

impl From<JobKind> for PackerKind {
    fn from(kind: JobKind) -> Self {
        match kind {
            JobKind::Sheets => PackerKind::Sheets,
            JobKind::Bars => PackerKind::Bars,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sheets {
            job,
            spacing,
            output,
        } => {
            let mut sheet_job: SheetJob = load_job(&job)?;
            if let Some(spacing) = spacing {
                sheet_job.spacing = spacing;
            }
            let plan = sheet_job
                .run()
                .with_context(|| format!("packing {}", job.display()))?;
            let report = SheetPlanReport::from(&plan);
            report.print_summary();

            if let Some(path) = output {
                report.save_json(&path)?;
                println!("Plan saved to: {}", path.display());
            }
        }

        Commands::Bars { job, kerf, output } => {
            let mut bar_job: BarJob = load_job(&job)?;
            if let Some(kerf) = kerf {
                bar_job.kerf = kerf;
            }
            let plan = bar_job
                .run()
                .with_context(|| format!("packing {}", job.display()))?;
            let report = BarPlanReport::from(&plan);
            report.print_summary();

            if let Some(path) = output {
                report.save_json(&path)?;
                println!("Plan saved to: {}", path.display());
            }
        }

        Commands::Generate {
            kind,
            specs,
            seed,
            output,
        } => {
            let mut generator = SyntheticGenerator::with_seed(seed);
            match kind {
                JobKind::Sheets => save_job(&generator.sheet_job(specs), &output)?,
                JobKind::Bars => save_job(&generator.bar_job(specs), &output)?,
            }
            println!("Job saved to: {}", output.display());
        }

        Commands::Bench {
            sizes,
            runs,
            seed,
            packer,
            output,
            csv,
        } => {
            let mut config = BenchmarkConfig::new()
                .with_sizes(sizes)
                .with_runs_per_size(runs)
                .with_seed(seed);
            if let Some(kind) = packer {
                config = config.with_packers(vec![kind.into()]);
            }

            let results = BenchmarkRunner::new(config).run()?;
            results.print_summary();

            if let Some(path) = output {
                results.save_json(&path)?;
                println!("Results saved to: {}", path.display());
            }

            if let Some(path) = csv {
                results.save_csv(&path)?;
                println!("CSV saved to: {}", path.display());
            }
        }
    }

    Ok(())
}
