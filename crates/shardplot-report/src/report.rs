//! Per-shard metrics report generator.
//!
//! For every shard index in `[0, shard_num)` the generator builds a
//! `ShardFigure` and writes it to `<output_dir>/shard<s>_<YYYYMMDD_HHMMSS>.png`.
//! Iterations run sequentially and the first error ends the run.

use std::fs;
use std::path::{Path, PathBuf};

use shardplot_core::error::{Result, ShardPlotError};
use shardplot_core::method::Method;
use shardplot_core::metrics::MetricsTable;

use crate::figure::ShardFigure;
use crate::render::FigureRenderer;

/// Timestamp format of output file names (local time, second granularity).
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Where the metrics of each shard come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricsSource {
    /// One file for every shard index, loaded once per run.
    Shared(PathBuf),
    /// One file per shard: `<dir>/Shard<s><N>.csv`.
    PerShard(PathBuf),
}

impl MetricsSource {
    pub fn shard_path(&self, shard: u32, shard_num: u32) -> PathBuf {
        match self {
            MetricsSource::Shared(path) => path.clone(),
            MetricsSource::PerShard(dir) => dir.join(format!("Shard{shard}{shard_num}.csv")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportParams {
    pub method: Method,
    pub source: MetricsSource,
    pub shard_num: u32,
    pub output_dir: PathBuf,
    /// ΔBalance threshold (panel 4).
    pub alpha: f64,
    /// Balance threshold (panel 3).
    pub beta: f64,
}

/// `shard<s>_<timestamp>.png`
pub fn output_file_name(shard: u32, timestamp: &str) -> String {
    format!("shard{shard}_{timestamp}.png")
}

/// Render every shard of one run. Returns the written paths in shard order.
pub fn generate(params: &ReportParams, renderer: &dyn FigureRenderer) -> Result<Vec<PathBuf>> {
    if params.shard_num == 0 {
        return Err(ShardPlotError::Config("shard_num must be >= 1".into()));
    }

    fs::create_dir_all(&params.output_dir)
        .map_err(|e| ShardPlotError::io(&params.output_dir, e))?;

    let shared = match &params.source {
        MetricsSource::Shared(path) => Some(MetricsTable::from_path(path)?),
        MetricsSource::PerShard(_) => None,
    };

    let mut written = Vec::with_capacity(params.shard_num as usize);
    for shard in 0..params.shard_num {
        let loaded;
        let table = match &shared {
            Some(table) => table,
            None => {
                loaded = MetricsTable::from_path(params.source.shard_path(shard, params.shard_num))?;
                &loaded
            }
        };

        let figure = ShardFigure::build(shard, params.method, params.alpha, params.beta, table);

        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let path = params.output_dir.join(output_file_name(shard, &timestamp));
        write_figure(renderer, &figure, &path)?;

        tracing::info!(shard, rows = table.len(), path = %path.display(), "shard figure written");
        println!("shard {shard} -> {}", path.display());
        written.push(path);
    }

    println!(
        "all {} shard figures written to {}",
        written.len(),
        params.output_dir.display()
    );
    Ok(written)
}

/// Render into a hidden sibling file, then rename into place, so `path` only
/// ever holds a complete image.
fn write_figure(renderer: &dyn FigureRenderer, figure: &ShardFigure, path: &Path) -> Result<()> {
    let tmp = partial_path(path);
    if let Err(e) = renderer.render(figure, &tmp) {
        tracing::error!(shard = figure.shard, error = %e, "render failed");
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        ShardPlotError::io(path, e)
    })
}

// keeps the .png extension, the bitmap encoder picks the format from it
fn partial_path(path: &Path) -> PathBuf {
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.partial.png"))
}
