//! shardplot report library entry.
//!
//! This crate turns simulator metrics into figures: strict config loading,
//! the figure layout model, the PNG renderer, the per-shard generator and the
//! sweep runner. It is consumed by the `shardplot` binary and by integration
//! tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod figure;
pub mod render;
pub mod report;
pub mod sweep;
