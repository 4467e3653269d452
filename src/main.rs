//! OPTICS CLI
//!
//! Compute the OPTICS ordering of labeled points from the command line.
//!
//! Usage:
//!     optics run --input points.txt --min-pts 3 --epsilon 100
//!     cat points.txt | optics run -m 3 -e 100 --format json
//!     optics demo

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use optics_ordering::adapters::fixture::{reference_config, reference_points};
use optics_ordering::adapters::input::read_points;
use optics_ordering::adapters::report::{OutputFormat, Report};
use optics_ordering::{LabeledPoint, MetricKind, OpticsConfig, OpticsEngine, Result};

/// OPTICS - density ordering with core and reachability distances
#[derive(Parser)]
#[command(name = "optics")]
#[command(version)]
#[command(about = "Ordering Points To Identify the Clustering Structure", long_about = None)]
struct Cli {
    /// Log run progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Order points read from a file or stdin (`x y label` per line)
    Run {
        /// Input file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Neighbors needed for a core point (self excluded)
        #[arg(short, long)]
        min_pts: usize,

        /// Neighborhood radius
        #[arg(short, long)]
        epsilon: f64,

        /// Distance metric
        #[arg(long, default_value = "euclidean")]
        metric: MetricKind,

        /// Decimal places in text output
        #[arg(short, long, default_value_t = 2)]
        precision: u32,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Compute all pairwise distances up front, in parallel
        #[arg(long)]
        precompute: bool,
    },

    /// Order the built-in reference dataset (minPts 3, epsilon 100)
    Demo {
        /// Decimal places in text output
        #[arg(short, long, default_value_t = 2)]
        precision: u32,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "optics_ordering=debug"
    } else {
        "optics_ordering=warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_input(input: Option<&PathBuf>) -> Result<Vec<LabeledPoint>> {
    match input {
        Some(path) => {
            tracing::debug!("Reading points from {:?}", path);
            read_points(BufReader::new(File::open(path)?))
        }
        None => {
            tracing::debug!("Reading points from stdin");
            read_points(io::stdin().lock())
        }
    }
}

fn order_and_render(
    points: &[LabeledPoint],
    config: OpticsConfig,
    precision: u32,
    format: OutputFormat,
) -> Result<String> {
    let engine = OpticsEngine::new(config)?;
    let ordering = engine.run(points)?;
    Report::build(points, ordering, engine.config(), precision).render(format)
}

fn cmd_run(
    input: Option<PathBuf>,
    min_pts: usize,
    epsilon: f64,
    metric: MetricKind,
    precision: u32,
    format: OutputFormat,
    precompute: bool,
) -> Result<String> {
    let points = read_input(input.as_ref())?;
    let config = OpticsConfig::new(min_pts, epsilon)
        .with_shared_metric(metric.build())
        .with_precompute(precompute);
    order_and_render(&points, config, precision, format)
}

fn cmd_demo(precision: u32, format: OutputFormat) -> Result<String> {
    order_and_render(&reference_points(), reference_config(), precision, format)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = match cli.command {
        Commands::Run {
            input,
            min_pts,
            epsilon,
            metric,
            precision,
            format,
            precompute,
        } => cmd_run(input, min_pts, epsilon, metric, precision, format, precompute),
        Commands::Demo { precision, format } => cmd_demo(precision, format),
    };

    match output {
        Ok(text) => {
            print!("{}", text);
            if !text.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
