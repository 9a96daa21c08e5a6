//! Chart-segment descriptors emitted by the aggregators.
//!
//! The renderer consumes these as-is; all aggregation (grouping, sorting,
//! stacking offsets) happens before a `ChartSpec` is built.

use serde::{Deserialize, Serialize};

/// One segment of a stacked bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarSegment {
    /// Column index on the x axis.
    pub column: usize,
    /// Segment height in whole yen (always positive).
    pub height: i64,
    /// Cumulative height of the segments stacked below this one.
    pub bottom: i64,
    /// Text drawn inside the segment.
    pub label: String,
}

/// Everything the renderer needs to draw one stacked bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub segments: Vec<BarSegment>,
    /// One tick label per column, in column order.
    pub tick_labels: Vec<String>,
    pub y_label: String,
    pub title: Option<String>,
}

impl ChartSpec {
    /// Highest stacked point across all columns. Zero for an empty chart.
    pub fn max_top(&self) -> i64 {
        self.segments
            .iter()
            .map(|s| s.bottom + s.height)
            .max()
            .unwrap_or(0)
    }
}
