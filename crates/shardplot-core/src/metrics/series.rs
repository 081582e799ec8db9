//! Derived per-metric series.

use std::fmt;

use super::record::{col, MetricsRecord};

/// The six monitored amount columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Tax,
    Subsidy,
    FItxMin,
    FCtxMin,
    Balance,
    DeltaBalance,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Tax,
        Metric::Subsidy,
        Metric::FItxMin,
        Metric::FCtxMin,
        Metric::Balance,
        Metric::DeltaBalance,
    ];

    /// Source column in the simulator CSV.
    pub fn column(self) -> usize {
        match self {
            Metric::Tax => col::TAX,
            Metric::Subsidy => col::SUBSIDY,
            Metric::FItxMin => col::F_ITX_MIN,
            Metric::FCtxMin => col::F_CTX_MIN,
            Metric::Balance => col::BALANCE,
            Metric::DeltaBalance => col::DELTA_BALANCE,
        }
    }

    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Tax => "Tax",
            Metric::Subsidy => "Subsidy",
            Metric::FItxMin => "F_itx_min",
            Metric::FCtxMin => "F_ctx_min",
            Metric::Balance => "Balance",
            Metric::DeltaBalance => "ΔBalance",
        }
    }

    pub fn value(self, record: &MetricsRecord) -> Option<f64> {
        match self {
            Metric::Tax => record.tax,
            Metric::Subsidy => record.subsidy,
            Metric::FItxMin => record.f_itx_min,
            Metric::FCtxMin => record.f_ctx_min,
            Metric::Balance => record.balance,
            Metric::DeltaBalance => record.delta_balance,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One metric against block height, in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    metric: Metric,
    points: Vec<(u64, Option<f64>)>,
}

impl Series {
    pub fn from_records(metric: Metric, records: &[MetricsRecord]) -> Self {
        let points = records
            .iter()
            .map(|r| (r.block_height, metric.value(r)))
            .collect();
        Self { metric, points }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn points(&self) -> &[(u64, Option<f64>)] {
        &self.points
    }

    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|(_, v)| *v).collect()
    }

    /// Maximal runs of present values. A missing value ends the current run,
    /// so lines are never drawn across a gap.
    pub fn segments(&self) -> Vec<Vec<(u64, f64)>> {
        let mut out = Vec::new();
        let mut current = Vec::new();
        for &(height, value) in &self.points {
            match value {
                Some(v) => current.push((height, v)),
                None => {
                    if !current.is_empty() {
                        out.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            out.push(current);
        }
        out
    }

    /// Present values as (height, value) pairs.
    pub fn present(&self) -> Vec<(u64, f64)> {
        self.points
            .iter()
            .filter_map(|&(h, v)| v.map(|v| (h, v)))
            .collect()
    }

    /// One `(height, 0.0)` marker per missing value.
    pub fn missing_overlay(&self) -> Vec<(u64, f64)> {
        self.points
            .iter()
            .filter(|(_, v)| v.is_none())
            .map(|&(h, _)| (h, 0.0))
            .collect()
    }

    pub fn missing_count(&self) -> usize {
        self.points.iter().filter(|(_, v)| v.is_none()).count()
    }

    /// Min and max over present values.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .filter_map(|(_, v)| *v)
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
