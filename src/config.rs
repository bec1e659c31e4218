//! JSON configuration for the `ascii_batch` tool.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct BatchConfig {
    pub jobs: Vec<BatchJob>,
    /// Keep going after a failed job instead of aborting the batch.
    #[serde(default)]
    pub continue_on_error: bool,
}

#[derive(Debug, Deserialize)]
pub struct BatchJob {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Optional JSON conversion report.
    #[serde(default)]
    pub report: Option<PathBuf>,
}

impl BatchConfig {
    /// Resolve relative job paths against `base` (usually the config's directory).
    pub fn resolve_paths(&mut self, base: &Path) {
        for job in &mut self.jobs {
            job.input = base.join(&job.input);
            job.output = base.join(&job.output);
            if let Some(report) = job.report.as_mut() {
                *report = base.join(&*report);
            }
        }
    }
}

pub fn parse_config(data: &str, path: &Path) -> Result<BatchConfig> {
    serde_json::from_str(data).map_err(|source| Error::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a batch config; relative paths are taken relative to the config file.
pub fn load_config(path: &Path) -> Result<BatchConfig> {
    let data = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config = parse_config(&data, path)?;
    if let Some(base) = path.parent() {
        config.resolve_paths(base);
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default() {
        let cfg = parse_config(
            r#"{ "jobs": [ { "input": "a.png", "output": "a.txt" } ] }"#,
            Path::new("cfg.json"),
        )
        .unwrap();
        assert!(!cfg.continue_on_error);
        assert_eq!(cfg.jobs.len(), 1);
        assert!(cfg.jobs[0].report.is_none());
    }

    #[test]
    fn relative_paths_resolve_against_base() {
        let mut cfg = parse_config(
            r#"{ "jobs": [ { "input": "in/a.png", "output": "/abs/a.txt", "report": "r.json" } ],
                 "continue_on_error": true }"#,
            Path::new("cfg.json"),
        )
        .unwrap();
        cfg.resolve_paths(Path::new("/data"));
        let job = &cfg.jobs[0];
        assert_eq!(job.input, Path::new("/data/in/a.png"));
        assert_eq!(job.output, Path::new("/abs/a.txt"));
        assert_eq!(job.report.as_deref(), Some(Path::new("/data/r.json")));
        assert!(cfg.continue_on_error);
    }

    #[test]
    fn malformed_config_names_the_file() {
        let err = parse_config("{ \"jobs\": 3 }", Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, Error::ParseConfig { .. }));
        assert!(err.to_string().contains("bad.json"), "{err}");
    }
}
