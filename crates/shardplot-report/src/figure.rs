//! Figure layout model.
//!
//! A `ShardFigure` is everything the renderer draws, computed up front from a
//! `MetricsTable`: series split at gaps, missing-value overlays, threshold
//! reference lines and axis ranges. Renderers only translate it to pixels.

use shardplot_core::method::Method;
use shardplot_core::metrics::{Metric, MetricsTable, Series};

/// Plain RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

const PALETTE: [Rgb; 6] = [
    Rgb(0x3a, 0x86, 0xff),
    Rgb(0xff, 0x7b, 0x3e),
    Rgb(0x4c, 0xc9, 0xf0),
    Rgb(0xf6, 0xb9, 0x3b),
    Rgb(0x3a, 0x0c, 0xa3),
    Rgb(0xf7, 0x25, 0x85),
];
const MISSING: Rgb = Rgb(0xe0, 0x00, 0x00);
const THRESHOLD: Rgb = Rgb(0x80, 0x80, 0x80);
const ZERO: Rgb = Rgb(0x00, 0x00, 0x00);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Square,
    Triangle,
    /// `x`
    Cross,
    /// `+`
    Plus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

/// A metric drawn as a line with point markers.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub metric: Metric,
    pub color: Rgb,
    pub style: LineStyle,
    pub marker: MarkerShape,
    /// Contiguous runs of present values.
    pub segments: Vec<Vec<(f64, f64)>>,
}

impl Trace {
    fn from_series(series: &Series, color: Rgb, style: LineStyle, marker: MarkerShape) -> Self {
        let segments = series
            .segments()
            .into_iter()
            .map(|seg| seg.into_iter().map(|(h, v)| (h as f64, v)).collect())
            .collect();
        Self {
            metric: series.metric(),
            color,
            style,
            marker,
            segments,
        }
    }

    pub fn label(&self) -> &'static str {
        self.metric.label()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.segments.iter().flatten().copied()
    }
}

/// Markers at y = 0 for the rows where a metric is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub metric: Metric,
    pub color: Rgb,
    pub marker: MarkerShape,
    pub points: Vec<(f64, f64)>,
}

impl Overlay {
    fn missing(series: &Series, marker: MarkerShape) -> Self {
        Self {
            metric: series.metric(),
            color: MISSING,
            marker,
            points: series
                .missing_overlay()
                .into_iter()
                .map(|(h, y)| (h as f64, y))
                .collect(),
        }
    }

    pub fn label(&self) -> String {
        format!("Missing {}", self.metric.label())
    }
}

/// Horizontal reference line spanning the whole x range.
#[derive(Debug, Clone, PartialEq)]
pub struct RefLine {
    pub y: f64,
    pub label: Option<String>,
    pub color: Rgb,
    pub style: LineStyle,
}

impl RefLine {
    fn threshold(y: f64, label: String) -> Self {
        Self {
            y,
            label: Some(label),
            color: THRESHOLD,
            style: LineStyle::Dashed,
        }
    }

    fn zero() -> Self {
        Self {
            y: 0.0,
            label: None,
            color: ZERO,
            style: LineStyle::Dotted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    TaxSubsidy,
    MinFees,
    Balance,
    DeltaBalance,
}

impl PanelKind {
    pub const ALL: [PanelKind; 4] = [
        PanelKind::TaxSubsidy,
        PanelKind::MinFees,
        PanelKind::Balance,
        PanelKind::DeltaBalance,
    ];
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub kind: PanelKind,
    pub x_label: String,
    pub y_label: String,
    pub traces: Vec<Trace>,
    pub overlays: Vec<Overlay>,
    pub ref_lines: Vec<RefLine>,
    /// Pin the bottom of the y axis to this value.
    pub y_floor: Option<f64>,
}

impl Panel {
    fn new(kind: PanelKind, y_label: &str) -> Self {
        Self {
            kind,
            x_label: "Block Height".into(),
            y_label: y_label.into(),
            traces: Vec::new(),
            overlays: Vec::new(),
            ref_lines: Vec::new(),
            y_floor: None,
        }
    }

    pub fn trace(&self, metric: Metric) -> Option<&Trace> {
        self.traces.iter().find(|t| t.metric == metric)
    }

    pub fn overlay(&self, metric: Metric) -> Option<&Overlay> {
        self.overlays.iter().find(|o| o.metric == metric)
    }

    pub fn ref_line_values(&self) -> Vec<f64> {
        self.ref_lines.iter().map(|r| r.y).collect()
    }

    /// Y axis range covering traces, overlays and reference lines, padded by
    /// 5% of the span, with the floor applied last.
    pub fn y_range(&self) -> (f64, f64) {
        let ys = self
            .traces
            .iter()
            .flat_map(|t| t.points().map(|(_, y)| y))
            .chain(self.overlays.iter().flat_map(|o| o.points.iter().map(|&(_, y)| y)))
            .chain(self.ref_lines.iter().map(|r| r.y));

        let (lo, hi) = bounds(ys).unwrap_or((0.0, 1.0));
        let (mut lo, mut hi) = pad(lo, hi);

        if let Some(floor) = self.y_floor {
            lo = floor;
            if hi <= lo {
                hi = lo + 1.0;
            }
        }
        (lo, hi)
    }
}

/// The 1x4 overview of one shard.
#[derive(Debug, Clone, PartialEq)]
pub struct ShardFigure {
    pub shard: u32,
    pub title: String,
    pub x_range: (f64, f64),
    pub panels: Vec<Panel>,
}

impl ShardFigure {
    pub fn build(shard: u32, method: Method, alpha: f64, beta: f64, table: &MetricsTable) -> Self {
        let tax = table.series(Metric::Tax);
        let subsidy = table.series(Metric::Subsidy);
        let f_itx = table.series(Metric::FItxMin);
        let f_ctx = table.series(Metric::FCtxMin);
        let balance = table.series(Metric::Balance);
        let delta = table.series(Metric::DeltaBalance);

        let mut p1 = Panel::new(PanelKind::TaxSubsidy, "Value (ETH)");
        p1.traces = vec![
            Trace::from_series(&tax, PALETTE[0], LineStyle::Solid, MarkerShape::Circle),
            Trace::from_series(&subsidy, PALETTE[1], LineStyle::Dashed, MarkerShape::Square),
        ];
        p1.overlays = vec![
            Overlay::missing(&tax, MarkerShape::Cross),
            Overlay::missing(&subsidy, MarkerShape::Plus),
        ];

        let mut p2 = Panel::new(PanelKind::MinFees, "Min Fee (ETH)");
        p2.traces = vec![
            Trace::from_series(&f_itx, PALETTE[2], LineStyle::Solid, MarkerShape::Circle),
            Trace::from_series(&f_ctx, PALETTE[3], LineStyle::Dashed, MarkerShape::Square),
        ];
        p2.y_floor = Some(0.0);

        let mut p3 = Panel::new(PanelKind::Balance, "Balance (ETH)");
        p3.traces = vec![Trace::from_series(
            &balance,
            PALETTE[4],
            LineStyle::Solid,
            MarkerShape::Circle,
        )];
        p3.overlays = vec![Overlay::missing(&balance, MarkerShape::Cross)];
        p3.ref_lines = vec![
            RefLine::threshold(beta, "+EpsilonBalance".into()),
            RefLine::threshold(-beta, "-EpsilonBalance".into()),
            RefLine::zero(),
        ];

        let mut p4 = Panel::new(PanelKind::DeltaBalance, "ΔBalance (ETH)");
        p4.traces = vec![Trace::from_series(
            &delta,
            PALETTE[5],
            LineStyle::Dashed,
            MarkerShape::Triangle,
        )];
        p4.overlays = vec![Overlay::missing(&delta, MarkerShape::Plus)];
        p4.ref_lines = vec![
            RefLine::threshold(alpha, "+EpsilonΔBalance".into()),
            RefLine::threshold(-alpha, "-EpsilonΔBalance".into()),
            RefLine::zero(),
        ];

        let x_range = match table.block_range() {
            Some((lo, hi)) => pad(lo as f64, hi as f64),
            None => (0.0, 1.0),
        };

        Self {
            shard,
            title: format!(
                "Shard {shard} Metrics Overview | Method={}, α={alpha}, β={beta}",
                method.display_name()
            ),
            x_range,
            panels: vec![p1, p2, p3, p4],
        }
    }

    pub fn panel(&self, kind: PanelKind) -> Option<&Panel> {
        self.panels.iter().find(|p| p.kind == kind)
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn pad(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    if span <= 0.0 {
        let d = if lo == 0.0 { 1.0 } else { lo.abs() * 0.1 };
        return (lo - d, hi + d);
    }
    (lo - span * 0.05, hi + span * 0.05)
}
