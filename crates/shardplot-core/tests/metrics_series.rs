#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use shardplot_core::amount::{parse_amount, wei_to_token, NIL_SENTINEL};
use shardplot_core::metrics::{Metric, MetricsRecord, MetricsTable};

fn record(height: u64, tax: Option<f64>) -> MetricsRecord {
    MetricsRecord {
        block_height: height,
        balance: Some(0.0),
        delta_balance: Some(0.0),
        tax,
        subsidy: Some(0.0),
        f_itx_min: Some(0.0),
        f_ctx_min: Some(0.0),
    }
}

#[test]
fn nil_sentinel_is_missing_not_zero() {
    assert_eq!(parse_amount(NIL_SENTINEL), Ok(None));
    assert_eq!(parse_amount(" nil "), Ok(None));
    assert_eq!(parse_amount("0"), Ok(Some(0.0)));
    assert!(parse_amount("NIL").is_err());
    assert!(parse_amount("").is_err());
    assert!(parse_amount("inf").is_err());
    assert!(parse_amount("NaN").is_err());
}

#[test]
fn amounts_rescale_from_wei() {
    let raw = "123456789012345678901";
    let got = parse_amount(raw).unwrap().unwrap();
    let want = raw.parse::<f64>().unwrap() / 1e18;
    assert!(((got - want) / want).abs() < 1e-9);
    assert_eq!(wei_to_token(5e17), 0.5);
}

#[test]
fn missing_rows_go_to_overlay_only() {
    let table = MetricsTable::from_records(vec![
        record(1, Some(1.0)),
        record(2, None),
        record(3, Some(3.0)),
    ]);
    let tax = table.series(Metric::Tax);

    assert_eq!(tax.values(), vec![Some(1.0), None, Some(3.0)]);
    assert_eq!(tax.missing_overlay(), vec![(2, 0.0)]);
    assert_eq!(tax.missing_count(), 1);

    // the gap splits the line
    assert_eq!(tax.segments(), vec![vec![(1, 1.0)], vec![(3, 3.0)]]);
    assert!(tax.present().iter().all(|&(h, _)| h != 2));
}

#[test]
fn segments_skip_leading_and_trailing_gaps() {
    let table = MetricsTable::from_records(vec![
        record(1, None),
        record(2, Some(2.0)),
        record(3, Some(4.0)),
        record(4, None),
        record(5, None),
    ]);
    let tax = table.series(Metric::Tax);

    assert_eq!(tax.segments(), vec![vec![(2, 2.0), (3, 4.0)]]);
    assert_eq!(tax.missing_overlay(), vec![(1, 0.0), (4, 0.0), (5, 0.0)]);
    assert_eq!(tax.value_bounds(), Some((2.0, 4.0)));
}

#[test]
fn table_summary() {
    let table = MetricsTable::from_records(vec![
        record(4, None),
        record(9, Some(1.0)),
        record(9, None),
    ]);
    assert_eq!(table.block_range(), Some((4, 9)));

    let counts = table.missing_counts();
    assert!(counts.contains(&(Metric::Tax, 2)));
    assert!(counts.contains(&(Metric::Balance, 0)));
    assert_eq!(MetricsTable::default().block_range(), None);
}

#[test]
fn missing_source_file_is_io_error() {
    let err = MetricsTable::from_path("does/not/exist/shard.csv").expect_err("must fail");
    assert_eq!(err.code().as_str(), "IO");
    assert!(err.to_string().contains("does/not/exist/shard.csv"));
}

#[test]
fn invalid_cell_reports_metric_column() {
    use shardplot_core::error::ShardPlotError;

    for metric in Metric::ALL {
        let mut cells = vec!["0"; 10];
        cells[metric.column()] = "bogus";
        let csv = format!("h,a,b,c,d,e,f,g,h,i\n{}\n", cells.join(","));

        match MetricsTable::from_reader(csv.as_bytes()) {
            Err(ShardPlotError::InvalidNumber { row, column, value }) => {
                assert_eq!(row, 1, "metric={metric}");
                assert_eq!(column, metric.column(), "metric={metric}");
                assert_eq!(value, "bogus");
            }
            other => panic!("metric={metric}: unexpected {other:?}"),
        }
    }
}
