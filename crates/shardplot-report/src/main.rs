//! shardplot CLI
//!
//! Reads a sweep config, renders one tax/fee/balance overview per shard for
//! every sweep point, and exits non-zero on the first failure.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use shardplot_core::error::Result;
use shardplot_report::{config, render::PngRenderer, sweep};

#[derive(Debug, Parser)]
#[command(name = "shardplot", about = "Per-shard tax/fee/balance figures from taxpool simulator CSVs")]
struct Args {
    /// Sweep config (YAML).
    #[arg(long, default_value = "shardplot.yaml")]
    config: PathBuf,

    /// Override `output_root`.
    #[arg(long)]
    output_root: Option<PathBuf>,

    /// Override `sweep.shard_counts` with a single value.
    #[arg(long)]
    shard_num: Option<u32>,
}

fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    match run(&args) {
        Ok(written) => {
            tracing::info!(figures = written.len(), "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "shardplot failed");
            eprintln!("error [{}]: {e}", e.code().as_str());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<Vec<PathBuf>> {
    let mut cfg = config::load_from_file(&args.config)?;
    cfg.apply_overrides(args.output_root.clone(), args.shard_num)?;

    sweep::run_sweep(&cfg, &PngRenderer::default())
}
