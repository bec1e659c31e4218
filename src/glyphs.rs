//! Glyph mapper: one ASCII character per non-overlapping 2×2 block.
//!
//! A block's four bits are packed as `TL TR BL BR` (top-left is the most
//! significant bit) and the resulting 4-bit key indexes [`GLYPH_TABLE`].
//! Trailing odd rows/columns of the binary grid are dropped, never padded.

use crate::image::{BinaryGrid, ImageView};
use crate::types::GlyphGrid;

/// Glyph for every 4-bit block key.
///
/// ```text
/// key  TL TR / BL BR   glyph
///  0    00 / 00        ' '
///  3    00 / 11        '_'
///  5    01 / 01        ']'
/// 10    10 / 10        '['
/// 15    11 / 11        '#'
/// ```
pub const GLYPH_TABLE: [u8; 16] = [
    b' ', b'.', b',', b'_', b'\'', b']', b'/', b'd', b'`', b'\\', b'[', b'L', b'^', b'?', b'F',
    b'#',
];

/// Pack a block into its 4-bit key. Any non-zero input counts as set.
#[inline]
pub fn block_bitmask(top_left: u8, top_right: u8, bottom_left: u8, bottom_right: u8) -> u8 {
    (u8::from(top_left != 0) << 3)
        | (u8::from(top_right != 0) << 2)
        | (u8::from(bottom_left != 0) << 1)
        | u8::from(bottom_right != 0)
}

/// Glyph that best resembles a 2×2 block of ink bits.
#[inline]
pub fn classify_block(top_left: u8, top_right: u8, bottom_left: u8, bottom_right: u8) -> char {
    GLYPH_TABLE[block_bitmask(top_left, top_right, bottom_left, bottom_right) as usize] as char
}

/// Map a binary grid to glyphs, producing `⌊W/2⌋ × ⌊H/2⌋` cells.
pub fn map_to_glyphs(bits: &BinaryGrid) -> GlyphGrid {
    let (gw, gh) = (bits.w / 2, bits.h / 2);
    let mut data = vec![b' '; gw * gh];
    if gw > 0 && gh > 0 {
        fill_glyph_rows(bits, gw, &mut data);
    }
    GlyphGrid::from_glyphs(gw, gh, data)
}

#[inline]
fn glyph_row(top: &[u8], bottom: &[u8], dst: &mut [u8]) {
    for (bx, glyph) in dst.iter_mut().enumerate() {
        let x = bx * 2;
        let key = block_bitmask(top[x], top[x + 1], bottom[x], bottom[x + 1]);
        *glyph = GLYPH_TABLE[key as usize];
    }
}

#[cfg(feature = "parallel")]
fn fill_glyph_rows(bits: &BinaryGrid, gw: usize, data: &mut [u8]) {
    use rayon::prelude::*;

    data.par_chunks_mut(gw)
        .enumerate()
        .for_each(|(by, dst)| glyph_row(bits.row(by * 2), bits.row(by * 2 + 1), dst));
}

#[cfg(not(feature = "parallel"))]
fn fill_glyph_rows(bits: &BinaryGrid, gw: usize, data: &mut [u8]) {
    fill_glyph_rows_seq(bits, gw, data);
}

#[cfg_attr(all(feature = "parallel", not(test)), allow(dead_code))]
fn fill_glyph_rows_seq(bits: &BinaryGrid, gw: usize, data: &mut [u8]) {
    for (by, dst) in data.chunks_mut(gw).enumerate() {
        glyph_row(bits.row(by * 2), bits.row(by * 2 + 1), dst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_block_maps_to_its_glyph() {
        let expected = [
            ((0, 0, 0, 0), ' '),
            ((0, 0, 0, 1), '.'),
            ((0, 0, 1, 0), ','),
            ((0, 0, 1, 1), '_'),
            ((0, 1, 0, 0), '\''),
            ((0, 1, 0, 1), ']'),
            ((0, 1, 1, 0), '/'),
            ((0, 1, 1, 1), 'd'),
            ((1, 0, 0, 0), '`'),
            ((1, 0, 0, 1), '\\'),
            ((1, 0, 1, 0), '['),
            ((1, 0, 1, 1), 'L'),
            ((1, 1, 0, 0), '^'),
            ((1, 1, 0, 1), '?'),
            ((1, 1, 1, 0), 'F'),
            ((1, 1, 1, 1), '#'),
        ];
        for ((tl, tr, bl, br), glyph) in expected {
            assert_eq!(
                classify_block(tl, tr, bl, br),
                glyph,
                "block TL={tl} TR={tr} BL={bl} BR={br}"
            );
        }
    }

    #[test]
    fn bitmask_orders_top_left_first() {
        assert_eq!(block_bitmask(1, 0, 0, 0), 0b1000);
        assert_eq!(block_bitmask(0, 1, 0, 0), 0b0100);
        assert_eq!(block_bitmask(0, 0, 1, 0), 0b0010);
        assert_eq!(block_bitmask(0, 0, 0, 1), 0b0001);
    }

    #[test]
    fn nonzero_values_count_as_ink() {
        assert_eq!(classify_block(7, 0, 255, 2), classify_block(1, 0, 1, 1));
        assert_eq!(classify_block(9, 9, 9, 9), '#');
    }

    #[test]
    fn blocks_are_read_from_matching_rows_and_columns() {
        // Two blocks side by side: left is `/`, right is `[`.
        #[rustfmt::skip]
        let bits = BinaryGrid::from_bits(4, 2, vec![
            0, 1, 1, 0,
            1, 0, 1, 0,
        ]);
        assert_eq!(map_to_glyphs(&bits).to_text(), "/[");
    }

    #[test]
    fn odd_trailing_row_and_column_are_dropped() {
        #[rustfmt::skip]
        let bits = BinaryGrid::from_bits(5, 5, vec![
            1, 1, 0, 0, 1,
            1, 1, 0, 1, 1,
            0, 0, 1, 0, 1,
            1, 1, 0, 0, 1,
            1, 1, 1, 1, 1,
        ]);
        let glyphs = map_to_glyphs(&bits);
        assert_eq!((glyphs.w, glyphs.h), (2, 2));
        assert_eq!(glyphs.to_text(), "#.\n_`");
    }

    #[test]
    fn last_even_block_row_is_filled() {
        let bits = BinaryGrid::from_bits(4, 4, vec![1; 16]);
        assert_eq!(map_to_glyphs(&bits).to_text(), "##\n##");
    }

    #[test]
    fn row_loop_matches_map_to_glyphs_on_odd_noise() {
        let (w, h) = (41, 29);
        let mut state = 0x2545_f491u32;
        let bits: Vec<u8> = (0..w * h)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state & 1) as u8
            })
            .collect();
        let bits = BinaryGrid::from_bits(w, h, bits);

        let (gw, gh) = (w / 2, h / 2);
        let mut seq = vec![0u8; gw * gh];
        fill_glyph_rows_seq(&bits, gw, &mut seq);
        assert_eq!(map_to_glyphs(&bits), GlyphGrid::from_glyphs(gw, gh, seq));
    }

    #[test]
    fn grids_without_a_full_block_are_empty() {
        for (w, h) in [(0, 0), (1, 1), (1, 6), (6, 1)] {
            let glyphs = map_to_glyphs(&BinaryGrid::new(w, h));
            assert_eq!((glyphs.w, glyphs.h), (w / 2, h / 2), "{w}x{h}");
            assert!(glyphs.to_text().trim_end_matches('\n').is_empty());
        }
    }
}
