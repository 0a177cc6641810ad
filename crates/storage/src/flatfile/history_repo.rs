use async_trait::async_trait;
use quiz_core::model::HistoryRecord;

use super::{FlatFileRepository, HISTORY_FILE};
use crate::repository::{HistoryRepository, StorageError};

#[async_trait]
impl HistoryRepository for FlatFileRepository {
    async fn append(&self, record: &HistoryRecord) -> Result<(), StorageError> {
        self.append_line(HISTORY_FILE, &record.to_string()).await
    }

    async fn load_all(&self) -> Result<Vec<HistoryRecord>, StorageError> {
        let lines = self.read_lines(HISTORY_FILE).await?;
        let mut records = Vec::with_capacity(lines.len());
        for line in lines {
            match HistoryRecord::from_record_line(&line) {
                Ok(record) => records.push(record),
                Err(err) => tracing::debug!(%err, "skipping malformed history record"),
            }
        }
        Ok(records)
    }
}
