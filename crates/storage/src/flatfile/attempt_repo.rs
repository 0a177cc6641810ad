use async_trait::async_trait;
use quiz_core::model::Username;

use super::{ATTEMPTS_FILE, FlatFileRepository};
use crate::repository::{AttemptRepository, StorageError};

#[async_trait]
impl AttemptRepository for FlatFileRepository {
    async fn record(&self, username: &Username) -> Result<(), StorageError> {
        self.append_line(ATTEMPTS_FILE, username.as_str()).await
    }

    async fn has_attempted(&self, username: &Username) -> Result<bool, StorageError> {
        let lines = self.read_lines(ATTEMPTS_FILE).await?;
        Ok(lines.iter().any(|line| line == username.as_str()))
    }
}
