mod record;
mod store;

pub use record::ScoreRecord;
pub use store::{ScoreHistory, ScoreHistoryConfig};
