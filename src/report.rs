//! Serializable summary of one conversion, written next to the text output
//! by the batch tool.

use crate::image::{BinaryGrid, ImageView};
use crate::types::GlyphGrid;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Timing entry describing a single stage of the conversion.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for a conversion.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub input_width: usize,
    pub input_height: usize,
    pub columns: usize,
    pub rows: usize,
    /// Pixels below the brightness threshold.
    pub ink_pixels: usize,
    /// Occurrences of each glyph in the output.
    pub glyph_counts: BTreeMap<String, usize>,
    pub timing: TimingBreakdown,
}

impl ConversionReport {
    pub(crate) fn from_grids(bits: &BinaryGrid, glyphs: &GlyphGrid, timing: TimingBreakdown) -> Self {
        let mut glyph_counts = BTreeMap::new();
        for row in glyphs.rows() {
            for &g in row {
                *glyph_counts.entry((g as char).to_string()).or_insert(0) += 1;
            }
        }
        Self {
            input_width: bits.w,
            input_height: bits.h,
            columns: glyphs.w,
            rows: glyphs.h,
            ink_pixels: bits.ink_count(),
            glyph_counts,
            timing,
        }
    }
}
