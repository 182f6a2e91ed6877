// Writes the painting to saves/painting_<YYYYMMDD_HHMMSS>.png.
// A failed save is reported and logged, never fatal.

use crate::canvas::Canvas;
use crate::error::Error;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

pub const SAVE_SUBDIR: &str = "saves";
const FILE_PREFIX: &str = "painting";

pub fn timestamped_stem(now: DateTime<Local>) -> String {
    now.format("%Y%m%d_%H%M%S").to_string()
}

pub fn build_filename(now: DateTime<Local>) -> String {
    format!("{}_{}.png", FILE_PREFIX, timestamped_stem(now))
}

/// Create `dir` if needed and export the canvas into it.
pub fn export_painting(canvas: &Canvas, dir: &Path, now: DateTime<Local>) -> Result<PathBuf, Error> {
    fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(build_filename(now));
    canvas.export(&path)?;
    Ok(path)
}

#[derive(Debug)]
pub enum SaveOutcome {
    Saved(PathBuf),
    Failed(String),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved(_))
    }

    /// One-line text for the status area.
    pub fn message(&self) -> String {
        match self {
            SaveOutcome::Saved(path) => format!("Saved {}", path.display()),
            SaveOutcome::Failed(reason) => format!("Save failed: {reason}"),
        }
    }
}

/// The save boundary: errors stop here, get logged, and come back as a value.
pub fn save_painting(canvas: &Canvas, dir: &Path, now: DateTime<Local>) -> SaveOutcome {
    match export_painting(canvas, dir, now) {
        Ok(path) => {
            tracing::info!(path = %path.display(), "canvas saved");
            SaveOutcome::Saved(path)
        }
        Err(err) => {
            tracing::error!(error = %err, dir = %dir.display(), "saving canvas failed");
            SaveOutcome::Failed(err.to_string())
        }
    }
}
