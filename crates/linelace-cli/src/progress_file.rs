//! Progress persisted as a JSON file.

use std::{fs, io, path::PathBuf};

use linelace_game::{MemoryProgress, ProgressStore, PuzzleId};

use crate::error::CliError;

/// Progress backed by an optional JSON file.
///
/// Without a path, progress lives only for the current session.
#[derive(Debug, Default)]
pub struct ProgressFile {
    path: Option<PathBuf>,
    progress: MemoryProgress,
}

impl ProgressFile {
    /// Loads progress from `path`; a missing file means no progress yet.
    pub fn load(path: Option<PathBuf>) -> Result<Self, CliError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let progress = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).map_err(|source| CliError::Progress {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no progress file at {}, starting fresh", path.display());
                MemoryProgress::default()
            }
            Err(source) => return Err(CliError::Read { path, source }),
        };
        Ok(Self {
            path: Some(path),
            progress,
        })
    }

    /// Writes the progress back to its file, if it has one.
    pub fn save(&self) -> Result<(), CliError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&self.progress).map_err(|source| {
            CliError::Progress {
                path: path.clone(),
                source,
            }
        })?;
        fs::write(path, json).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
        log::debug!("saved progress to {}", path.display());
        Ok(())
    }
}

impl ProgressStore for ProgressFile {
    fn furthest_unlocked(&self, tier: &str) -> usize {
        self.progress.furthest_unlocked(tier)
    }

    fn record_completed(&mut self, id: &PuzzleId) {
        self.progress.record_completed(id);
    }
}
