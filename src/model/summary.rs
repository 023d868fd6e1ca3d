use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Labels rendered as bullish (green) in the summary table.
pub const BULLISH_LABELS: [&str; 4] = ["PG-OI", "FG-OI", "PG-TT", "FG-TT"];

/// Labels rendered as bearish (red).
pub const BEARISH_LABELS: [&str; 4] = ["FR-OI", "NG-OI", "FR-TT", "NG-TT"];

/// Aggregate-magnitude labels rendered as a neutral highlight (purple).
pub const HIGHLIGHT_LABELS: [&str; 2] = ["ABS-OI", "ABS-VOL"];

/// Presentation category for a summary-table row, derived purely from its
/// label. Membership is exact-match and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Bullish,
    Bearish,
    Highlight,
    None,
}

impl Category {
    /// Classify a label against the fixed membership sets. Labels absent
    /// from every set get `Category::None`.
    pub fn classify(label: &str) -> Category {
        if BULLISH_LABELS.contains(&label) {
            Category::Bullish
        } else if BEARISH_LABELS.contains(&label) {
            Category::Bearish
        } else if HIGHLIGHT_LABELS.contains(&label) {
            Category::Highlight
        } else {
            Category::None
        }
    }
}

/// One row of the labeled summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SummaryRow {
    /// Row identifier, e.g. "PG-OI" or "FR-TT".
    pub label: String,
    /// QQQ level, passed through unrounded.
    pub qqq: f64,
    /// NQ level, quantized to the nearest 0.25 tick.
    pub nq: f64,
    pub category: Category,
}
