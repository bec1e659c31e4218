//! Owned binary grid in row-major layout (stride == width).
//!
//! Each cell is `0` (light) or `1` (ink). The grid always has the exact
//! dimensions of the image it was derived from.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryGrid {
    /// Grid width in cells (source image width)
    pub w: usize,
    /// Grid height in cells (source image height)
    pub h: usize,
    /// Number of cells between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<u8>,
}

impl BinaryGrid {
    /// Construct an all-light grid of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0; w * h],
        }
    }

    /// Build a grid from row-major bits. Panics if `data.len() != w * h`.
    pub fn from_bits(w: usize, h: usize, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), w * h, "bit buffer does not match {w}x{h}");
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Number of non-zero (ink) cells.
    pub fn ink_count(&self) -> usize {
        self.data.iter().filter(|&&b| b != 0).count()
    }
}

impl crate::image::traits::ImageView for BinaryGrid {
    type Pixel = u8;

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
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

impl crate::image::traits::ImageViewMut for BinaryGrid {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
