//! CSV loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use super::record::MetricsRecord;
use super::series::{Metric, Series};
use crate::error::{Result, ShardPlotError};

/// All blocks of one metrics file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsTable {
    records: Vec<MetricsRecord>,
}

impl MetricsTable {
    pub fn from_records(records: Vec<MetricsRecord>) -> Self {
        Self { records }
    }

    /// Load a simulator metrics CSV. The first line is a header and is skipped.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ShardPlotError::io(path, e))?;
        let table = Self::from_reader(file)?;

        tracing::debug!(
            path = %path.display(),
            rows = table.len(),
            block_range = ?table.block_range(),
            missing = ?table.missing_counts(),
            "metrics table loaded"
        );
        Ok(table)
    }

    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        // header and rows disagree on field count in simulator output
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(rdr);

        let mut records = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let row = idx + 1;
            let raw = result.map_err(|e| ShardPlotError::Schema {
                row,
                msg: format!("unreadable row: {e}"),
            })?;
            records.push(MetricsRecord::from_record(&raw, row)?);
        }

        let table = Self { records };
        if !table.is_height_ordered() {
            tracing::warn!("block heights are not non-decreasing");
        }
        Ok(table)
    }

    pub fn records(&self) -> &[MetricsRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn series(&self, metric: Metric) -> Series {
        Series::from_records(metric, &self.records)
    }

    pub fn block_heights(&self) -> Vec<u64> {
        self.records.iter().map(|r| r.block_height).collect()
    }

    /// Lowest and highest block height.
    pub fn block_range(&self) -> Option<(u64, u64)> {
        let lo = self.records.iter().map(|r| r.block_height).min()?;
        let hi = self.records.iter().map(|r| r.block_height).max()?;
        Some((lo, hi))
    }

    pub fn missing_counts(&self) -> Vec<(Metric, usize)> {
        Metric::ALL
            .iter()
            .map(|&m| {
                let n = self.records.iter().filter(|r| m.value(r).is_none()).count();
                (m, n)
            })
            .collect()
    }

    fn is_height_ordered(&self) -> bool {
        self.records
            .windows(2)
            .all(|w| w[0].block_height <= w[1].block_height)
    }
}
