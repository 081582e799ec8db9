//! Figure renderers.
//!
//! The generator hands a finished `ShardFigure` and a destination path to a
//! `FigureRenderer`. `PngRenderer` draws with plotters; tests inject their own.

pub mod png;

use std::path::Path;

use shardplot_core::error::Result;

use crate::figure::ShardFigure;

pub use png::PngRenderer;

pub trait FigureRenderer {
    /// Draw `figure` and write it to `path`.
    fn render(&self, figure: &ShardFigure, path: &Path) -> Result<()>;
}
