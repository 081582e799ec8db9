use std::path::PathBuf;

use serde::Deserialize;
use shardplot_core::error::{Result, ShardPlotError};
use shardplot_core::method::Method;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub version: u32,

    pub experiment: ExperimentSection,

    pub source: SourceSection,

    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,

    #[serde(default)]
    pub thresholds: ThresholdSection,

    pub sweep: SweepSection,
}

impl ReportConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ShardPlotError::UnsupportedVersion(self.version));
        }
        if self.output_root.as_os_str().is_empty() {
            return Err(ShardPlotError::Config("output_root must not be empty".into()));
        }

        self.experiment.validate()?;
        self.source.validate()?;
        self.thresholds.validate()?;
        self.sweep.validate()?;

        Ok(())
    }

    /// Apply command-line overrides and re-run validation on the result.
    /// `shard_num` replaces the whole `sweep.shard_counts` list.
    pub fn apply_overrides(
        &mut self,
        output_root: Option<PathBuf>,
        shard_num: Option<u32>,
    ) -> Result<()> {
        if let Some(root) = output_root {
            self.output_root = root;
        }
        if let Some(n) = shard_num {
            self.sweep.shard_counts = vec![n];
        }
        self.validate()
    }

    /// Output directory of one sweep point: `<output_root>/<dataset>_<shards>s_<block_size>`.
    pub fn output_dir(&self, shards: u32, block_size: u32) -> PathBuf {
        self.output_root
            .join(format!("{}_{shards}s_{block_size}", self.experiment.dataset))
    }
}

fn default_output_root() -> PathBuf {
    PathBuf::from("outputPlots")
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperimentSection {
    /// 0 Broker, 1 CLPA, 2 BrokerChain, 3 Monoxide.
    pub method: u8,
    pub dataset: String,
}

impl ExperimentSection {
    pub fn validate(&self) -> Result<()> {
        self.method()?;
        if self.dataset.trim().is_empty() {
            return Err(ShardPlotError::Config(
                "experiment.dataset must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn method(&self) -> Result<Method> {
        Method::try_from(self.method)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceLayoutKind {
    /// One file shared by every shard index.
    #[default]
    Shared,
    /// A directory holding `Shard<s><N>.csv` per shard.
    PerShard,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceSection {
    #[serde(default)]
    pub layout: SourceLayoutKind,

    /// Path template; `{dataset}`, `{shards}` and `{block_size}` are substituted.
    pub path: String,
}

impl SourceSection {
    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(ShardPlotError::Config("source.path must not be empty".into()));
        }
        Ok(())
    }

    pub fn render_path(&self, dataset: &str, shards: u32, block_size: u32) -> PathBuf {
        PathBuf::from(
            self.path
                .replace("{dataset}", dataset)
                .replace("{shards}", &shards.to_string())
                .replace("{block_size}", &block_size.to_string()),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdSection {
    /// ΔBalance band, in tokens.
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Balance band, in tokens.
    #[serde(default = "default_beta")]
    pub beta: f64,
}

impl Default for ThresholdSection {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            beta: default_beta(),
        }
    }
}

impl ThresholdSection {
    pub fn validate(&self) -> Result<()> {
        for (name, v) in [("alpha", self.alpha), ("beta", self.beta)] {
            if !v.is_finite() || v < 0.0 {
                return Err(ShardPlotError::Config(format!(
                    "thresholds.{name} must be a finite non-negative number"
                )));
            }
        }
        Ok(())
    }
}

// simulator's EpsilonDeltaBalance (10^16 wei)
fn default_alpha() -> f64 {
    0.01
}
// simulator's EpsilonBalance (10^17 wei)
fn default_beta() -> f64 {
    0.1
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepSection {
    pub shard_counts: Vec<u32>,

    /// Block sizes (the driver's "inject speed" axis).
    pub block_sizes: Vec<u32>,
}

impl SweepSection {
    pub fn validate(&self) -> Result<()> {
        if self.shard_counts.is_empty() {
            return Err(ShardPlotError::Config(
                "sweep.shard_counts must not be empty".into(),
            ));
        }
        if self.block_sizes.is_empty() {
            return Err(ShardPlotError::Config(
                "sweep.block_sizes must not be empty".into(),
            ));
        }
        if self.shard_counts.contains(&0) {
            return Err(ShardPlotError::Config(
                "sweep.shard_counts entries must be >= 1".into(),
            ));
        }
        if self.block_sizes.contains(&0) {
            return Err(ShardPlotError::Config(
                "sweep.block_sizes entries must be >= 1".into(),
            ));
        }
        Ok(())
    }
}
