//! Provenance records written next to CLI artifacts.
//!
//! Each artifact `foo.json` gets `foo.json.provenance.json` describing which
//! detector (or sampler token) produced it and from what input.

use anyhow::{Context, Result};
use collinear::Algo;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Origin {
    /// Segments from one detector run.
    Detect {
        algo: String,
        input: PathBuf,
        points: usize,
        segments: usize,
    },
    /// Point file from the seeded sampler.
    Sample {
        seed: u64,
        index: u64,
        background: usize,
        lines: usize,
        points: usize,
        planted: Vec<String>,
    },
}

impl Origin {
    pub fn detect(algo: Algo, input: &Path, points: usize, segments: usize) -> Self {
        Self::Detect {
            algo: algo.to_string(),
            input: input.to_path_buf(),
            points,
            segments,
        }
    }
}

/// Full sidecar document.
#[derive(Debug, Serialize)]
pub struct Record {
    pub code_rev: String,
    pub lib_version: &'static str,
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
    pub artifact: Option<PathBuf>,
}

impl Record {
    pub fn new(tag: Option<String>) -> Self {
        Self {
            code_rev: code_rev(),
            lib_version: collinear::VERSION,
            tag,
            origin: None,
            artifact: None,
        }
    }
}

/// Write the sidecar for `artifact` and return its path.
pub fn write_sidecar(artifact: &Path, origin: Origin, tag: Option<String>) -> Result<PathBuf> {
    let record = Record {
        origin: Some(origin),
        artifact: Some(artifact.to_path_buf()),
        ..Record::new(tag)
    };
    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `dir/name.ext` → `dir/name.ext.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact.as_os_str().to_os_string();
    name.push(".provenance.json");
    PathBuf::from(name)
}

/// Build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then `git`, else "unknown".
fn code_rev() -> String {
    let from_git = || {
        let out = Command::new("git").args(["rev-parse", "--short", "HEAD"]).output().ok()?;
        out.status
            .success()
            .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
    };
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty())
        .or_else(from_git)
        .unwrap_or_else(|| "unknown".to_string())
}
