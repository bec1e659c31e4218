use img2ascii::image::io::{load_rgb_image, write_glyph_text};
use img2ascii::{convert, Error};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let mut args = env::args().skip(1);
    let (input, output) = match (args.next(), args.next(), args.next()) {
        (Some(input), Some(output), None) => (input, output),
        _ => return Err(usage()),
    };

    let image = load_rgb_image(Path::new(&input))?;
    let glyphs = convert(image.as_view());
    write_glyph_text(&glyphs, Path::new(&output))?;

    log::info!(
        "wrote {}x{} glyphs from {} to {}",
        glyphs.w,
        glyphs.h,
        input,
        output
    );
    Ok(())
}

fn usage() -> Error {
    Error::Usage("Usage: img2ascii <input-image> <output-text>".to_string())
}
