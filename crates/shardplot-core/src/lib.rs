//! shardplot core: data contracts for the sharding fee-market experiment.
//!
//! This crate owns the positional schema of the simulator's per-block metrics
//! CSV, the fixed-point amount conversion, the derived per-metric series, and
//! the experiment vocabulary (methods, address-to-shard mapping). It carries no
//! rendering or CLI dependencies so it can be reused by other analysis tools.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed input surfaces as `ShardPlotError` with the row and column that
//! caused it.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod amount;
pub mod error;
pub mod method;
pub mod metrics;
pub mod sharding;

/// Shared result type.
pub use error::{ErrorCode, Result, ShardPlotError};
