use clap::ValueEnum;

/// How summary-table labels containing "ABS" are treated. The two observed
/// source variants disagree: the live dashboard drops those rows, the
/// standalone chart keeps them as a purple highlight. Both stay reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AbsPolicy {
    /// Drop any row whose label contains the substring "ABS".
    Exclude,
    /// Keep ABS rows; classification gives them `Category::Highlight`.
    Highlight,
}

/// Named mapping from pipeline fields to sheet positions.
///
/// All positional coupling to the spreadsheet layout lives here: the
/// pipeline body only ever reads named fields. Rows and columns are
/// 0-indexed with row 0 being the header row, so the spreadsheet's
/// "row 2" is `first_data_row = 1`.
///
/// Two extraction policies coexist deliberately and must not be unified:
/// the main series is sentinel-terminated (stops at the first missing
/// strike), while the summary table reads a fixed row window regardless
/// of content.
#[derive(Debug, Clone)]
pub struct SheetSchema {
    /// Sheet holding the per-strike series, scalars, and summary table.
    pub chart_sheet: String,
    /// Optional sheet holding call/put volume columns, located by header.
    pub volume_sheet: String,
    pub call_vol_header: String,
    pub put_vol_header: String,

    /// First data row of the main series (the row after the header).
    pub first_data_row: usize,
    pub strike_col: usize,
    pub gex_oi_col: usize,
    pub abs_oi_col: usize,
    pub gex_vol_col: usize,
    pub abs_vol_col: usize,

    pub label_col: usize,
    pub qqq_col: usize,
    pub nq_col: usize,
    /// Inclusive (first, last) rows of the summary-table window.
    pub summary_rows: (usize, usize),

    /// Fixed (row, col) cells for the scalar fields.
    pub spot_cell: (usize, usize),
    pub oi_gauge_cell: (usize, usize),
    pub vol_gauge_cell: (usize, usize),

    pub abs_policy: AbsPolicy,
}

impl Default for SheetSchema {
    /// Layout of the exported workbook: series in columns A-E, summary
    /// table in G:I rows 2-13, spot at H2, gauges at O2 and Q2.
    fn default() -> Self {
        Self {
            chart_sheet: "ChartData".to_string(),
            volume_sheet: "Volume".to_string(),
            call_vol_header: "Call Volume".to_string(),
            put_vol_header: "Put Volume".to_string(),
            first_data_row: 1,
            strike_col: 0,  // A
            gex_oi_col: 1,  // B
            abs_oi_col: 2,  // C
            gex_vol_col: 3, // D
            abs_vol_col: 4, // E
            label_col: 6,   // G
            qqq_col: 7,     // H
            nq_col: 8,      // I
            summary_rows: (1, 12),    // rows 2..=13
            spot_cell: (1, 7),        // H2
            oi_gauge_cell: (1, 14),   // O2
            vol_gauge_cell: (1, 16),  // Q2
            abs_policy: AbsPolicy::Highlight,
        }
    }
}

impl SheetSchema {
    pub fn with_abs_policy(mut self, policy: AbsPolicy) -> Self {
        self.abs_policy = policy;
        self
    }
}
