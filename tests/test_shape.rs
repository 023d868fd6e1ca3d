use std::collections::HashMap;

use gexboard::pipeline::{self, ShapeError, schema::SheetSchema};
use gexboard::source::{Cell, Sheet, Workbook};

// ── Mock workbook ───────────────────────────────────────────────────

struct MemWorkbook {
    sheets: HashMap<String, Sheet>,
}

impl MemWorkbook {
    fn new() -> Self {
        Self {
            sheets: HashMap::new(),
        }
    }

    fn with_sheet(mut self, name: &str, sheet: Sheet) -> Self {
        self.sheets.insert(name.to_string(), sheet);
        self
    }
}

impl Workbook for MemWorkbook {
    fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.get(name)
    }
}

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a ChartData-shaped sheet from (strike, gex-oi, abs-oi, gex-vol,
/// abs-vol) rows, with a header in row 0.
fn chart_sheet(rows: &[[f64; 5]]) -> Sheet {
    let mut sheet = Sheet::default();
    for (col, header) in ["Strike", "GEX-OI", "ABS-OI", "GEX-VOL", "ABS-VOL"]
        .iter()
        .enumerate()
    {
        sheet.set(0, col, Cell::Text(header.to_string()));
    }
    for (i, row) in rows.iter().enumerate() {
        for (col, v) in row.iter().enumerate() {
            sheet.set(i + 1, col, Cell::Number(*v));
        }
    }
    sheet
}

fn volume_sheet(rows: &[[f64; 2]]) -> Sheet {
    let mut sheet = Sheet::default();
    sheet.set(0, 0, Cell::Text("Call Volume".to_string()));
    sheet.set(0, 1, Cell::Text("Put Volume".to_string()));
    for (i, row) in rows.iter().enumerate() {
        sheet.set(i + 1, 0, Cell::Number(row[0]));
        sheet.set(i + 1, 1, Cell::Number(row[1]));
    }
    sheet
}

fn workbook(sheet: Sheet) -> MemWorkbook {
    MemWorkbook::new().with_sheet("ChartData", sheet)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── Tests ───────────────────────────────────────────────────────────

#[test]
fn splits_signed_series_into_positive_and_negative() {
    let wb = workbook(chart_sheet(&[
        [100.0, 5.0, 1.0, 2.5, 7.0],
        [101.0, -3.0, 2.0, -4.0, 8.0],
        [102.0, 0.0, 3.0, 0.0, 9.0],
    ]));
    let shaped = pipeline::shape(&wb, &SheetSchema::default()).unwrap();

    assert_eq!(shaped.strikes, vec![100.0, 101.0, 102.0]);
    assert_eq!(shaped.pos_gex_oi, vec![5.0, 0.0, 0.0]);
    assert_eq!(shaped.neg_gex_oi, vec![0.0, -3.0, 0.0]);
    assert_eq!(shaped.pos_gex_vol, vec![2.5, 0.0, 0.0]);
    assert_eq!(shaped.neg_gex_vol, vec![0.0, -4.0, 0.0]);
    assert_eq!(shaped.abs_oi, vec![1.0, 2.0, 3.0]);
    assert_eq!(shaped.abs_vol, vec![7.0, 8.0, 9.0]);
}

#[test]
fn split_halves_recompose_to_the_original_value() {
    for v in [-17.25, -0.001, 0.0, 0.5, 42.0] {
        let pos = pipeline::positive(v);
        let neg = pipeline::negative(v);
        assert!(pos >= 0.0);
        assert!(neg <= 0.0);
        assert!(approx(pos + neg, v));
    }
}

#[test]
fn main_series_terminates_at_first_missing_strike() {
    let mut sheet = chart_sheet(&[[100.0, 1.0, 1.0, 1.0, 1.0], [101.0, 2.0, 2.0, 2.0, 2.0]]);
    // Row 3 has no strike; row 4 has data again, which must be ignored.
    sheet.set(4, 0, Cell::Number(104.0));
    sheet.set(4, 1, Cell::Number(9.0));

    let shaped = pipeline::shape(&workbook(sheet), &SheetSchema::default()).unwrap();
    assert_eq!(shaped.strikes, vec![100.0, 101.0]);
    assert_eq!(shaped.len(), 2);
}

#[test]
fn non_numeric_metric_cells_default_to_zero() {
    let mut sheet = chart_sheet(&[[100.0, 5.0, 1.0, 1.0, 1.0]]);
    sheet.set(1, 1, Cell::Text("n/a".to_string()));
    sheet.set(1, 3, Cell::Empty);
    // Strikes given as numeric text still parse.
    sheet.set(1, 0, Cell::Text("100.5".to_string()));

    let shaped = pipeline::shape(&workbook(sheet), &SheetSchema::default()).unwrap();
    assert_eq!(shaped.strikes, vec![100.5]);
    assert_eq!(shaped.pos_gex_oi, vec![0.0]);
    assert_eq!(shaped.neg_gex_oi, vec![0.0]);
    assert_eq!(shaped.pos_gex_vol, vec![0.0]);
}

#[test]
fn scalars_read_from_fixed_cells_with_zero_defaults() {
    let mut sheet = chart_sheet(&[[100.0, 1.0, 1.0, 1.0, 1.0]]);
    sheet.set(1, 7, Cell::Number(432.5)); // spot at H2
    sheet.set(1, 14, Cell::Number(0.234)); // OI gauge ratio at O2
    // VOL gauge cell left empty.

    let shaped = pipeline::shape(&workbook(sheet), &SheetSchema::default()).unwrap();
    assert!(approx(shaped.spot, 432.5));
    assert!(approx(shaped.gex_oi_gauge, 23.4));
    assert!(approx(shaped.gex_vol_gauge, 0.0));
}

#[test]
fn shorter_volume_sheet_shrinks_every_series() {
    let wb = workbook(chart_sheet(&[
        [100.0, 1.0, 1.0, 1.0, 1.0],
        [101.0, 2.0, 2.0, 2.0, 2.0],
        [102.0, 3.0, 3.0, 3.0, 3.0],
    ]))
    .with_sheet("Volume", volume_sheet(&[[10.0, 20.0], [11.0, 21.0]]));

    let shaped = pipeline::shape(&wb, &SheetSchema::default()).unwrap();
    assert_eq!(shaped.strikes, vec![100.0, 101.0]);
    assert_eq!(shaped.abs_oi, vec![1.0, 2.0]);
    assert_eq!(shaped.call_vol, Some(vec![10.0, 11.0]));
    assert_eq!(shaped.put_vol, Some(vec![20.0, 21.0]));
}

#[test]
fn volume_sheet_without_expected_headers_is_ignored() {
    let mut bogus = Sheet::default();
    bogus.set(0, 0, Cell::Text("Something Else".to_string()));
    bogus.set(1, 0, Cell::Number(1.0));

    let wb = workbook(chart_sheet(&[
        [100.0, 1.0, 1.0, 1.0, 1.0],
        [101.0, 2.0, 2.0, 2.0, 2.0],
    ]))
    .with_sheet("Volume", bogus);

    let shaped = pipeline::shape(&wb, &SheetSchema::default()).unwrap();
    assert_eq!(shaped.call_vol, None);
    assert_eq!(shaped.put_vol, None);
    // The main series keeps its own length.
    assert_eq!(shaped.len(), 2);
}

#[test]
fn truncate_all_uses_the_minimum_length() {
    let mut a: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let mut b: Vec<f64> = (0..8).map(|i| i as f64).collect();
    let mut c: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let mut d: Vec<f64> = (0..9).map(|i| i as f64).collect();
    let mut e: Vec<f64> = (0..10).map(|i| i as f64).collect();

    pipeline::truncate_all(&mut [&mut a, &mut b, &mut c, &mut d, &mut e]);

    for s in [&a, &b, &c, &d, &e] {
        assert_eq!(s.len(), 8);
    }
}

#[test]
fn shaping_is_deterministic_for_one_snapshot() {
    let sheet = {
        let mut s = chart_sheet(&[[100.0, 5.0, 1.0, -2.0, 3.0], [101.0, -3.0, 2.0, 4.0, 5.0]]);
        s.set(1, 7, Cell::Number(100.5));
        s.set(1, 6, Cell::Text("PG-OI".to_string()));
        s.set(1, 8, Cell::Number(101.37));
        s
    };
    let wb = workbook(sheet);

    let first = pipeline::shape(&wb, &SheetSchema::default()).unwrap();
    let second = pipeline::shape(&wb, &SheetSchema::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_chart_sheet_is_fatal() {
    let wb = MemWorkbook::new();
    let err = pipeline::shape(&wb, &SheetSchema::default()).unwrap_err();
    assert!(matches!(err, ShapeError::MissingSheet(name) if name == "ChartData"));
}

#[test]
fn empty_sheet_yields_empty_series_not_an_error() {
    let shaped = pipeline::shape(&workbook(Sheet::default()), &SheetSchema::default()).unwrap();
    assert!(shaped.is_empty());
    assert_eq!(shaped.summary.len(), 0);
    assert!(approx(shaped.spot, 0.0));
}
