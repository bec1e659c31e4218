//! End-to-end conversion: decoded image → binary grid → glyph grid.

use crate::binarize::binarize;
use crate::glyphs::map_to_glyphs;
use crate::image::ImageRgb8;
use crate::report::{ConversionReport, TimingBreakdown};
use crate::types::GlyphGrid;
use log::{debug, warn};
use std::time::Instant;

/// Convert a decoded image to character art.
///
/// Pure and infallible: the same pixels always produce the same grid.
pub fn convert(img: ImageRgb8<'_>) -> GlyphGrid {
    let bits = binarize(img);
    map_to_glyphs(&bits)
}

/// Same as [`convert`], additionally returning a summary of the run.
pub fn convert_with_report(img: ImageRgb8<'_>) -> (GlyphGrid, ConversionReport) {
    let total = Instant::now();
    let mut timing = TimingBreakdown::default();

    let t = Instant::now();
    let bits = binarize(img);
    timing.push("binarize", elapsed_ms(t));

    let t = Instant::now();
    let glyphs = map_to_glyphs(&bits);
    timing.push("glyphs", elapsed_ms(t));
    timing.total_ms = elapsed_ms(total);

    debug!(
        "convert {}x{} -> {}x{} glyphs in {:.3} ms",
        img.w, img.h, glyphs.w, glyphs.h, timing.total_ms
    );
    if glyphs.w == 0 || glyphs.h == 0 {
        warn!(
            "image {}x{} has no complete 2x2 block; output is empty",
            img.w, img.h
        );
    }

    let report = ConversionReport::from_grids(&bits, &glyphs, timing);
    (glyphs, report)
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
