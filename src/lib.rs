#![doc = include_str!("../README.md")]

pub mod binarize;
pub mod config;
pub mod convert;
pub mod error;
pub mod glyphs;
pub mod image;
pub mod report;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::binarize::binarize;
pub use crate::convert::{convert, convert_with_report};
pub use crate::error::{Error, Result};
pub use crate::glyphs::{classify_block, map_to_glyphs};
pub use crate::report::ConversionReport;
pub use crate::types::GlyphGrid;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use img2ascii::prelude::*;
///
/// let pixels = vec![[0u8, 0, 0]; 4 * 2];
/// let img = ImageRgb8::new(4, 2, &pixels);
/// assert_eq!(convert(img).to_text(), "##");
/// ```
pub mod prelude {
    pub use crate::image::{BinaryGrid, ImageRgb8, ImageView};
    pub use crate::{binarize, classify_block, convert, map_to_glyphs, GlyphGrid};
}
