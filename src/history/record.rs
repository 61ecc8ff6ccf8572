use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// One finished game as written to the history file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Unix seconds at which the game ended
    pub timestamp: u64,
    pub score: u64,
    pub elapsed_secs: u64,
    pub victory: bool,
}

impl ScoreRecord {
    /// Record stamped with the current wall-clock time
    pub fn now(score: u64, elapsed_secs: u64, victory: bool) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        ScoreRecord {
            timestamp,
            score,
            elapsed_secs,
            victory,
        }
    }
}
