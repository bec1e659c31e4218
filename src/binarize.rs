//! Binarizer: maps every RGB pixel to one bit by thresholding its brightness.
//!
//! Brightness is the value channel of the RGB→HSV conversion, `max(r, g, b)`
//! scaled to `[0, 1]`. Hue and saturation play no part. Polarity is inverted
//! relative to brightness: light pixels (`>= 0.5`) become `0` and dark pixels
//! become `1`, so a set bit marks ink.

use crate::image::{BinaryGrid, ImageRgb8, ImageView, Rgb};

/// Fixed brightness cut between light and ink.
pub const BRIGHTNESS_THRESHOLD: f32 = 0.5;

/// HSV value of an RGB sample in `[0, 1]`.
#[inline]
pub fn brightness([r, g, b]: Rgb) -> f32 {
    r.max(g).max(b) as f32 / 255.0
}

/// True when the pixel is darker than the threshold.
#[inline]
pub fn is_ink(px: Rgb) -> bool {
    brightness(px) < BRIGHTNESS_THRESHOLD
}

/// Binarize a decoded image into a grid of identical dimensions.
pub fn binarize(img: ImageRgb8<'_>) -> BinaryGrid {
    let mut out = BinaryGrid::new(img.w, img.h);
    if out.is_empty() {
        return out;
    }
    fill_rows(img, &mut out);
    out
}

#[inline]
fn binarize_row(src: &[Rgb], dst: &mut [u8]) {
    for (bit, &px) in dst.iter_mut().zip(src) {
        *bit = u8::from(is_ink(px));
    }
}

#[cfg(feature = "parallel")]
fn fill_rows(img: ImageRgb8<'_>, out: &mut BinaryGrid) {
    use rayon::prelude::*;

    let w = out.w;
    out.data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, dst)| binarize_row(img.row(y), dst));
}

#[cfg(not(feature = "parallel"))]
fn fill_rows(img: ImageRgb8<'_>, out: &mut BinaryGrid) {
    fill_rows_seq(img, out);
}

#[cfg_attr(all(feature = "parallel", not(test)), allow(dead_code))]
fn fill_rows_seq(img: ImageRgb8<'_>, out: &mut BinaryGrid) {
    use crate::image::ImageViewMut;

    for y in 0..img.h {
        binarize_row(img.row(y), out.row_mut(y));
    }
}
