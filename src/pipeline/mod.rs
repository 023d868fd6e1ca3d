pub mod schema;

use thiserror::Error;

use crate::model::{Category, Shaped, SummaryRow};
use crate::source::{Sheet, Workbook};

use schema::{AbsPolicy, SheetSchema};

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("workbook has no sheet named `{0}`")]
    MissingSheet(String),
}

/// Positive half of a signed value: `max(0, v)`.
pub fn positive(v: f64) -> f64 {
    v.max(0.0)
}

/// Negative half of a signed value: `min(0, v)`.
pub fn negative(v: f64) -> f64 {
    v.min(0.0)
}

/// Quantize to the nearest 0.25 tick, half rounding away from zero:
/// 101.37 -> 101.25, 101.375 -> 101.5.
pub fn quantize_quarter(v: f64) -> f64 {
    (v * 4.0).round() / 4.0
}

/// Shrink every series to the shortest length among them. Excess tail
/// elements are discarded silently; a short column shrinks the visible
/// window instead of failing the whole load.
pub fn truncate_all(series: &mut [&mut Vec<f64>]) {
    let min = series.iter().map(|s| s.len()).min().unwrap_or(0);
    for s in series.iter_mut() {
        s.truncate(min);
    }
}

/// Run the shaping pipeline over one workbook snapshot.
///
/// Pure and stateless: the same snapshot always yields the same `Shaped`.
/// A missing chart sheet is the only error; per-cell problems degrade to
/// 0.0 defaults and length truncation, never failures.
pub fn shape(workbook: &dyn Workbook, schema: &SheetSchema) -> Result<Shaped, ShapeError> {
    let sheet = workbook
        .sheet(&schema.chart_sheet)
        .ok_or_else(|| ShapeError::MissingSheet(schema.chart_sheet.clone()))?;

    // ── Main series: sentinel-terminated on the strike column ────────
    let mut strikes = Vec::new();
    let mut gex_oi = Vec::new();
    let mut abs_oi = Vec::new();
    let mut gex_vol = Vec::new();
    let mut abs_vol = Vec::new();

    let mut row = schema.first_data_row;
    loop {
        let strike = sheet.cell(row, schema.strike_col);
        if strike.is_missing() {
            break;
        }
        strikes.push(strike.as_number().unwrap_or(0.0));
        gex_oi.push(numeric(sheet, row, schema.gex_oi_col));
        abs_oi.push(numeric(sheet, row, schema.abs_oi_col));
        gex_vol.push(numeric(sheet, row, schema.gex_vol_col));
        abs_vol.push(numeric(sheet, row, schema.abs_vol_col));
        row += 1;
    }

    // ── Optional call/put volume columns, located by header name ─────
    let mut volumes = workbook
        .sheet(&schema.volume_sheet)
        .and_then(|vs| read_volumes(vs, schema));

    // ── Common-length truncation across every contributing series ────
    {
        let mut series: Vec<&mut Vec<f64>> = vec![
            &mut strikes,
            &mut gex_oi,
            &mut abs_oi,
            &mut gex_vol,
            &mut abs_vol,
        ];
        if let Some((call, put)) = volumes.as_mut() {
            series.push(call);
            series.push(put);
        }
        truncate_all(&mut series);
    }
    let (call_vol, put_vol) = match volumes {
        Some((call, put)) => (Some(call), Some(put)),
        None => (None, None),
    };

    let pos_gex_oi = gex_oi.iter().copied().map(positive).collect();
    let neg_gex_oi = gex_oi.iter().copied().map(negative).collect();
    let pos_gex_vol = gex_vol.iter().copied().map(positive).collect();
    let neg_gex_vol = gex_vol.iter().copied().map(negative).collect();

    let (spot_row, spot_col) = schema.spot_cell;
    let (oi_row, oi_col) = schema.oi_gauge_cell;
    let (vol_row, vol_col) = schema.vol_gauge_cell;

    Ok(Shaped {
        strikes,
        pos_gex_oi,
        neg_gex_oi,
        abs_oi,
        pos_gex_vol,
        neg_gex_vol,
        abs_vol,
        call_vol,
        put_vol,
        spot: numeric(sheet, spot_row, spot_col),
        // Gauge cells hold fractional ratios; scale to percentages.
        gex_oi_gauge: numeric(sheet, oi_row, oi_col) * 100.0,
        gex_vol_gauge: numeric(sheet, vol_row, vol_col) * 100.0,
        summary: read_summary(sheet, schema),
    })
}

/// Numeric cell read with the pipeline's coercion policy: anything that is
/// not a number becomes 0.0.
fn numeric(sheet: &Sheet, row: usize, col: usize) -> f64 {
    sheet.cell(row, col).as_number().unwrap_or(0.0)
}

/// Summary table: fixed row window, skipping missing and excluded labels.
fn read_summary(sheet: &Sheet, schema: &SheetSchema) -> Vec<SummaryRow> {
    let (first, last) = schema.summary_rows;
    let mut rows = Vec::new();

    for row in first..=last {
        let Some(label) = sheet.cell(row, schema.label_col).as_text() else {
            continue;
        };
        if schema.abs_policy == AbsPolicy::Exclude && label.contains("ABS") {
            continue;
        }
        rows.push(SummaryRow {
            label: label.to_string(),
            qqq: numeric(sheet, row, schema.qqq_col),
            nq: quantize_quarter(numeric(sheet, row, schema.nq_col)),
            category: Category::classify(label),
        });
    }

    rows
}

/// Call/put volume columns from the secondary sheet. Returns `None` when
/// either header is absent, which renders the whole sheet unusable.
fn read_volumes(sheet: &Sheet, schema: &SheetSchema) -> Option<(Vec<f64>, Vec<f64>)> {
    let call_col = sheet.header_col(&schema.call_vol_header)?;
    let put_col = sheet.header_col(&schema.put_vol_header)?;

    let mut call = Vec::new();
    let mut put = Vec::new();
    for row in 1..sheet.row_count() {
        call.push(numeric(sheet, row, call_col));
        put.push(numeric(sheet, row, put_col));
    }
    Some((call, put))
}
