//! Positional row schema.
//!
//! The simulator's header does not line up with its rows (15 header fields,
//! 12 data fields), so columns are addressed by index only. Indices live in
//! this file and nowhere else.

use csv::StringRecord;

use crate::amount::parse_amount;
use crate::error::{Result, ShardPlotError};

/// Minimum number of fields every data row must carry.
pub const MIN_COLUMNS: usize = 10;

/// Column indices.
pub mod col {
    pub const BLOCK_HEIGHT: usize = 0;
    pub const BALANCE: usize = 4;
    pub const DELTA_BALANCE: usize = 5;
    pub const TAX: usize = 6;
    pub const SUBSIDY: usize = 7;
    pub const F_ITX_MIN: usize = 8;
    pub const F_CTX_MIN: usize = 9;
}

/// One block of one shard. Amounts are in whole tokens; `None` means the
/// simulator reported no value.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsRecord {
    pub block_height: u64,
    pub balance: Option<f64>,
    pub delta_balance: Option<f64>,
    pub tax: Option<f64>,
    pub subsidy: Option<f64>,
    pub f_itx_min: Option<f64>,
    pub f_ctx_min: Option<f64>,
}

impl MetricsRecord {
    /// Parse a data row. `row` is the 1-based data row number (header excluded)
    /// and is only used for diagnostics.
    pub fn from_record(record: &StringRecord, row: usize) -> Result<Self> {
        if record.len() < MIN_COLUMNS {
            return Err(ShardPlotError::Schema {
                row,
                msg: format!(
                    "expected at least {MIN_COLUMNS} columns, found {}",
                    record.len()
                ),
            });
        }

        let height_cell = field(record, row, col::BLOCK_HEIGHT)?.trim();
        let block_height =
            height_cell
                .parse::<u64>()
                .map_err(|_| ShardPlotError::InvalidNumber {
                    row,
                    column: col::BLOCK_HEIGHT,
                    value: height_cell.to_string(),
                })?;

        Ok(Self {
            block_height,
            balance: amount(record, row, col::BALANCE)?,
            delta_balance: amount(record, row, col::DELTA_BALANCE)?,
            tax: amount(record, row, col::TAX)?,
            subsidy: amount(record, row, col::SUBSIDY)?,
            f_itx_min: amount(record, row, col::F_ITX_MIN)?,
            f_ctx_min: amount(record, row, col::F_CTX_MIN)?,
        })
    }
}

fn field(record: &StringRecord, row: usize, column: usize) -> Result<&str> {
    record.get(column).ok_or_else(|| ShardPlotError::Schema {
        row,
        msg: format!("missing column {column}"),
    })
}

fn amount(record: &StringRecord, row: usize, column: usize) -> Result<Option<f64>> {
    let cell = field(record, row, column)?;
    parse_amount(cell).map_err(|value| ShardPlotError::InvalidNumber { row, column, value })
}
