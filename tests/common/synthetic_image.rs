use img2ascii::image::Rgb;

pub const WHITE: Rgb = [255, 255, 255];
pub const BLACK: Rgb = [0, 0, 0];

/// Solid-colour RGB buffer of `width * height` pixels.
pub fn solid_rgb(width: usize, height: usize, px: Rgb) -> Vec<Rgb> {
    vec![px; width * height]
}

/// High-contrast checkerboard with square cells of `cell` pixels.
/// The top-left cell is black.
pub fn checkerboard_rgb(width: usize, height: usize, cell: usize) -> Vec<Rgb> {
    assert!(cell > 0, "cell size must be positive");

    let mut img = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            img.push(if sum & 1 == 0 { BLACK } else { WHITE });
        }
    }
    img
}

/// Deterministic pseudo-random colours (xorshift), good enough to exercise
/// every block pattern.
pub fn noise_rgb(width: usize, height: usize, seed: u32) -> Vec<Rgb> {
    let mut state = seed.max(1);
    (0..width * height)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let [r, g, b, _] = state.to_le_bytes();
            [r, g, b]
        })
        .collect()
}
