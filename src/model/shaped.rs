use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::summary::SummaryRow;

/// Chart-ready output of the shaping pipeline.
///
/// Every per-strike series here has the same length: the minimum length
/// across the raw series that contributed (including call/put volume when
/// the volume sheet is present). Signed exposure series arrive pre-split
/// into positive and negative halves so a stacked-bar renderer can color
/// gains and losses independently without conditional logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Shaped {
    /// Strike prices, in sheet row order.
    pub strikes: Vec<f64>,
    /// Positive half of gamma exposure by open interest (`max(0, v)`).
    pub pos_gex_oi: Vec<f64>,
    /// Negative half of gamma exposure by open interest (`min(0, v)`).
    pub neg_gex_oi: Vec<f64>,
    /// Absolute open-interest magnitude.
    pub abs_oi: Vec<f64>,
    /// Positive half of gamma exposure by volume.
    pub pos_gex_vol: Vec<f64>,
    /// Negative half of gamma exposure by volume.
    pub neg_gex_vol: Vec<f64>,
    /// Absolute volume magnitude.
    pub abs_vol: Vec<f64>,
    /// Call volume per strike, when the volume sheet is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_vol: Option<Vec<f64>>,
    /// Put volume per strike, when the volume sheet is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put_vol: Option<Vec<f64>>,
    /// Current underlying price, plotted as a reference line.
    pub spot: f64,
    /// GEX open-interest gauge as a percentage (ratio x 100, unclamped).
    pub gex_oi_gauge: f64,
    /// GEX volume gauge as a percentage (ratio x 100, unclamped).
    pub gex_vol_gauge: f64,
    /// Labeled summary rows in sheet window order.
    pub summary: Vec<SummaryRow>,
}

impl Shaped {
    /// Number of strikes in the common window.
    pub fn len(&self) -> usize {
        self.strikes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strikes.is_empty()
    }

    /// Pair a value series with its strikes, in row order.
    pub fn with_strikes<'a>(
        &'a self,
        values: &'a [f64],
    ) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.strikes.iter().copied().zip(values.iter().copied())
    }
}
