use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::HistoryError;
use crate::history::record::ScoreRecord;

/// Configuration for the score history.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScoreHistoryConfig {
    pub path: PathBuf,
}

impl Default for ScoreHistoryConfig {
    fn default() -> Self {
        ScoreHistoryConfig {
            path: PathBuf::from("scores.json"),
        }
    }
}

/// Append-only list of finished games persisted as a JSON array.
#[derive(Debug)]
pub struct ScoreHistory {
    path: PathBuf,
    records: Vec<ScoreRecord>,
}

impl ScoreHistory {
    /// Load the history at `path`. A missing file is an empty history.
    pub fn open(path: &Path) -> Result<Self, HistoryError> {
        let records = if path.exists() {
            let json = fs::read_to_string(path).map_err(|e| HistoryError::Read {
                path: path.to_path_buf(),
                source: e,
            })?;
            serde_json::from_str(&json).map_err(|e| HistoryError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            Vec::new()
        };
        Ok(ScoreHistory {
            path: path.to_path_buf(),
            records,
        })
    }

    pub fn from_config(config: &ScoreHistoryConfig) -> Result<Self, HistoryError> {
        Self::open(&config.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// Highest recorded score, 0 if nothing has been recorded
    pub fn max_score(&self) -> u64 {
        self.records.iter().map(|r| r.score).max().unwrap_or(0)
    }

    /// Add a record and rewrite the file.
    pub fn append(&mut self, record: ScoreRecord) -> Result<(), HistoryError> {
        self.records.push(record);
        self.save()?;
        info!(
            "recorded score {} ({} records in {})",
            self.records.last().map_or(0, |r| r.score),
            self.records.len(),
            self.path.display()
        );
        Ok(())
    }

    fn save(&self) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.records)?;

        // Atomic rename
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
