//! Per-block shard metrics (taxpool simulator output).
//!
//! - `record`: one typed row, parsed positionally and validated once.
//! - `table`: CSV loading into records.
//! - `series`: per-metric views with missing-value bookkeeping.

pub mod record;
pub mod series;
pub mod table;

pub use record::{MetricsRecord, MIN_COLUMNS};
pub use series::{Metric, Series};
pub use table::MetricsTable;
