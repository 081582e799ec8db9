//! Experiment sweep: one report per (shard count, block size) point.

use std::path::PathBuf;

use shardplot_core::error::Result;

use crate::config::{ReportConfig, SourceLayoutKind};
use crate::render::FigureRenderer;
use crate::report::{generate, ReportParams, MetricsSource};

/// Build the generator parameters of one sweep point.
pub fn params_for(cfg: &ReportConfig, shards: u32, block_size: u32) -> Result<ReportParams> {
    let path = cfg
        .source
        .render_path(&cfg.experiment.dataset, shards, block_size);
    let source = match cfg.source.layout {
        SourceLayoutKind::Shared => MetricsSource::Shared(path),
        SourceLayoutKind::PerShard => MetricsSource::PerShard(path),
    };

    Ok(ReportParams {
        method: cfg.experiment.method()?,
        source,
        shard_num: shards,
        output_dir: cfg.output_dir(shards, block_size),
        alpha: cfg.thresholds.alpha,
        beta: cfg.thresholds.beta,
    })
}

/// Run every point in `shard_counts x block_sizes` order. Stops at the first
/// failing point.
pub fn run_sweep(cfg: &ReportConfig, renderer: &dyn FigureRenderer) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for &shards in &cfg.sweep.shard_counts {
        for &block_size in &cfg.sweep.block_sizes {
            let params = params_for(cfg, shards, block_size)?;
            tracing::info!(
                shards,
                block_size,
                source = ?params.source,
                output = %params.output_dir.display(),
                "sweep point"
            );
            written.extend(generate(&params, renderer)?);
        }
    }
    println!("sweep finished: {} figures", written.len());
    Ok(written)
}
