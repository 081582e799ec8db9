//! Report config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use shardplot_core::error::{Result, ShardPlotError};

pub use schema::{
    ExperimentSection, ReportConfig, SourceLayoutKind, SourceSection, SweepSection,
    ThresholdSection,
};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ReportConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| ShardPlotError::io(path, e))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ReportConfig> {
    let cfg: ReportConfig = serde_yaml::from_str(s)
        .map_err(|e| ShardPlotError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
