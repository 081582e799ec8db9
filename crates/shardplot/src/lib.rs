//! Top-level facade crate for shardplot.
//!
//! Re-exports the core data contracts and the report library so users can depend on a single crate.

pub mod core {
    pub use shardplot_core::*;
}

pub mod report {
    pub use shardplot_report::*;
}
