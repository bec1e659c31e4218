//! File boundary of the converter.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned RGB buffer.
//! - `decode_rgb_image`: same, from encoded bytes already in memory.
//! - `write_glyph_text`: write a glyph grid as ASCII text lines.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageRgb8, Rgb};
use crate::error::{Error, Result};
use crate::types::GlyphGrid;
use image::{DynamicImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned RGB buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbImageOwned {
    width: usize,
    height: usize,
    data: Vec<Rgb>,
}

impl RgbImageOwned {
    /// Construct an owned buffer from row-major RGB samples.
    pub fn new(width: usize, height: usize, data: Vec<Rgb>) -> Self {
        assert_eq!(data.len(), width * height, "RGB buffer does not match {width}x{height}");
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageRgb8` view
    pub fn as_view(&self) -> ImageRgb8<'_> {
        ImageRgb8::new(self.width, self.height, &self.data)
    }
}

impl From<RgbImage> for RgbImageOwned {
    fn from(img: RgbImage) -> Self {
        let width = img.width() as usize;
        let height = img.height() as usize;
        let data = img
            .into_raw()
            .chunks_exact(3)
            .map(|px| [px[0], px[1], px[2]])
            .collect();
        Self::new(width, height, data)
    }
}

/// Load an image from disk and convert to 8-bit RGB. Alpha is discarded.
pub fn load_rgb_image(path: &Path) -> Result<RgbImageOwned> {
    let img = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(into_rgb(img))
}

/// Decode an encoded image held in memory and convert to 8-bit RGB.
pub fn decode_rgb_image(bytes: &[u8]) -> Result<RgbImageOwned> {
    let img = image::load_from_memory(bytes).map_err(Error::DecodeMemory)?;
    Ok(into_rgb(img))
}

fn into_rgb(img: DynamicImage) -> RgbImageOwned {
    img.into_rgb8().into()
}

/// Write the glyph grid as text: one line per row, `\n` between rows and no
/// trailing newline. Parent directories are created as needed.
pub fn write_glyph_text(grid: &GlyphGrid, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, grid.to_text()).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| Error::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
