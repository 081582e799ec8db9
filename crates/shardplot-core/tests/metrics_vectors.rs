//! Metrics CSV vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use shardplot_core::metrics::{Metric, MetricsTable};
use shardplot_core::ShardPlotError;

mod vector_loader;
use vector_loader::{approx_eq, load};

fn metric_key(m: Metric) -> &'static str {
    match m {
        Metric::Tax => "tax",
        Metric::Subsidy => "subsidy",
        Metric::FItxMin => "f_itx_min",
        Metric::FCtxMin => "f_ctx_min",
        Metric::Balance => "balance",
        Metric::DeltaBalance => "delta_balance",
    }
}

#[test]
fn metrics_vectors() {
    let files = [
        "metrics_nil_tax.json",
        "metrics_simulator_rows.json",
        "metrics_header_only.json",
        "metrics_all_nil.json",
        "metrics_too_few_columns.json",
        "metrics_bad_number.json",
        "metrics_nil_height.json",
        "metrics_empty_cell.json",
    ];

    for f in files {
        let v = load(f);
        let res = MetricsTable::from_reader(v.csv_text().as_bytes());

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.code().as_str(), err.code, "vector={}", v.description);
            if let Some(row) = err.row {
                let got = match e {
                    ShardPlotError::Schema { row, .. } => row,
                    ShardPlotError::InvalidNumber { row, .. } => row,
                    other => panic!("unexpected error {other:?}"),
                };
                assert_eq!(got, row, "vector={}", v.description);
            }
            continue;
        }

        let table = res.expect("expected ok table");
        let ex = v.expect.expect("missing expect block");

        let heights: Vec<u64> = ex["block_heights"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| h.as_u64().unwrap())
            .collect();
        assert_eq!(table.block_heights(), heights, "vector={}", v.description);

        for metric in Metric::ALL {
            let Some(expected) = ex.get(metric_key(metric)) else { continue };
            let expected = expected.as_array().unwrap();
            let got = table.series(metric).values();
            assert_eq!(got.len(), expected.len(), "vector={} metric={metric}", v.description);

            for (i, (g, e)) in got.iter().zip(expected).enumerate() {
                match (g, e.as_f64()) {
                    (None, None) => assert!(e.is_null()),
                    (Some(g), Some(e)) => assert!(
                        approx_eq(*g, e),
                        "vector={} metric={metric} row={i}: {g} != {e}",
                        v.description
                    ),
                    _ => panic!(
                        "vector={} metric={metric} row={i}: got {g:?}, expected {e}",
                        v.description
                    ),
                }
            }
        }
    }
}
