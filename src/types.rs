use std::fmt;

/// Character-art output: one ASCII glyph per 2×2 block of the binary grid.
///
/// Dimensions are `⌊W/2⌋ × ⌊H/2⌋` of the source image. Glyphs are stored
/// as ASCII bytes in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphGrid {
    /// Glyph columns
    pub w: usize,
    /// Glyph rows
    pub h: usize,
    data: Vec<u8>,
}

impl GlyphGrid {
    pub(crate) fn from_glyphs(w: usize, h: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), w * h);
        debug_assert!(data.is_ascii());
        Self { w, h, data }
    }

    /// Build a grid from text rows of equal length.
    #[cfg(test)]
    pub(crate) fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let w = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(w * rows.len());
        for row in rows {
            let row = row.as_ref();
            assert!(row.is_ascii(), "glyph rows must be ASCII: {row:?}");
            assert_eq!(row.len(), w, "ragged glyph rows");
            data.extend_from_slice(row.as_bytes());
        }
        Self {
            w,
            h: rows.len(),
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> char {
        self.data[y * self.w + x] as char
    }

    /// Render as text: rows separated by `\n`, no trailing newline.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.data.len() + self.h);
        for y in 0..self.h {
            if y > 0 {
                out.push('\n');
            }
            let start = y * self.w;
            out.extend(self.data[start..start + self.w].iter().map(|&b| b as char));
        }
        out
    }
}

impl fmt::Display for GlyphGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl crate::image::traits::ImageView for GlyphGrid {
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
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}
