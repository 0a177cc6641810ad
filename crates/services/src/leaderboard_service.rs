use std::sync::Arc;

use quiz_core::model::HistoryRecord;
use storage::repository::HistoryRepository;

use crate::error::LeaderboardError;

/// Maximum number of entries the leaderboard shows.
pub const LEADERBOARD_SIZE: usize = 10;

/// Ranks records by score descending and truncates. `sort_by` is stable, so
/// equal scores keep their chronological (insertion) order.
#[must_use]
pub fn rank(mut records: Vec<HistoryRecord>, limit: usize) -> Vec<HistoryRecord> {
    records.sort_by(|a, b| b.score().cmp(&a.score()));
    records.truncate(limit);
    records
}

/// Read-side facade over the score history.
#[derive(Clone)]
pub struct LeaderboardService {
    history: Arc<dyn HistoryRepository>,
}

impl LeaderboardService {
    #[must_use]
    pub fn new(history: Arc<dyn HistoryRepository>) -> Self {
        Self { history }
    }

    /// Top entries by score, at most `LEADERBOARD_SIZE`.
    ///
    /// # Errors
    ///
    /// Returns `LeaderboardError::Storage` if the history cannot be read.
    pub async fn top(&self) -> Result<Vec<HistoryRecord>, LeaderboardError> {
        let records = self.history.load_all().await?;
        Ok(rank(records, LEADERBOARD_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Username;

    fn record(name: &str, score: u32) -> HistoryRecord {
        HistoryRecord::new(Username::new(name).unwrap(), score, 10, 30).unwrap()
    }

    #[test]
    fn sorts_by_score_descending_with_stable_ties() {
        let input = vec![
            record("A", 5),
            record("B", 7),
            record("C", 5),
            record("D", 9),
        ];

        let ranked = rank(input, LEADERBOARD_SIZE);
        let order: Vec<(&str, u32)> = ranked
            .iter()
            .map(|r| (r.username().as_str(), r.score()))
            .collect();

        assert_eq!(order, vec![("D", 9), ("B", 7), ("A", 5), ("C", 5)]);
    }

    #[test]
    fn truncates_to_the_limit() {
        let input: Vec<HistoryRecord> = (0..15).map(|i| record("p", i)).collect();
        assert_eq!(rank(input, LEADERBOARD_SIZE).len(), LEADERBOARD_SIZE);
    }

    #[test]
    fn empty_history_ranks_empty() {
        assert!(rank(Vec::new(), LEADERBOARD_SIZE).is_empty());
    }
}
