use img2ascii::config::{load_config, BatchJob};
use img2ascii::convert_with_report;
use img2ascii::image::io::{load_rgb_image, write_glyph_text, write_json_file};
use img2ascii::Error;
use log::{error, info};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(0) => {}
        Ok(failed) => {
            eprintln!("Error: {failed} job(s) failed");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

/// Returns the number of failed jobs when `continue_on_error` is set.
fn run() -> Result<usize, Error> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mut failed = 0;
    for (idx, job) in config.jobs.iter().enumerate() {
        match run_job(job) {
            Ok(()) => {}
            Err(err) if config.continue_on_error => {
                error!("job {idx} ({}) failed: {err}", job.input.display());
                failed += 1;
            }
            Err(err) => return Err(err),
        }
    }
    info!(
        "finished {} job(s), {} failed",
        config.jobs.len(),
        failed
    );
    Ok(failed)
}

fn run_job(job: &BatchJob) -> Result<(), Error> {
    let image = load_rgb_image(&job.input)?;
    let (glyphs, report) = convert_with_report(image.as_view());
    write_glyph_text(&glyphs, &job.output)?;
    if let Some(report_path) = &job.report {
        write_json_file(report_path, &report)?;
    }
    info!(
        "{} -> {} ({}x{} glyphs, {:.3} ms)",
        job.input.display(),
        job.output.display(),
        glyphs.w,
        glyphs.h,
        report.timing.total_ms
    );
    Ok(())
}

fn usage() -> Error {
    Error::Usage("Usage: ascii_batch <config.json>".to_string())
}
