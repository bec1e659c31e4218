//! Borrowed 8-bit RGB view: the decoded image handed to the converter.
//!
//! Samples are stored as `[r, g, b]` triples in row-major order; `stride`
//! counts pixels (not bytes) between consecutive rows.

/// One RGB sample, each channel in `[0, 255]`.
pub type Rgb = [u8; 3];

#[derive(Clone, Copy, Debug)]
pub struct ImageRgb8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: &'a [Rgb],
}

impl<'a> ImageRgb8<'a> {
    /// Tightly packed view (`stride == w`).
    pub fn new(w: usize, h: usize, data: &'a [Rgb]) -> Self {
        debug_assert!(data.len() >= w * h, "RGB buffer smaller than w * h");
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.data[y * self.stride + x]
    }
}

impl<'a> crate::image::traits::ImageView for ImageRgb8<'a> {
    type Pixel = Rgb;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[Rgb]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}
