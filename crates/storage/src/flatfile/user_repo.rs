use async_trait::async_trait;
use quiz_core::model::Username;

use super::{FlatFileRepository, USERS_FILE};
use crate::repository::{StorageError, UserRepository};

#[async_trait]
impl UserRepository for FlatFileRepository {
    async fn register(&self, username: &Username) -> Result<bool, StorageError> {
        let lines = self.read_lines(USERS_FILE).await?;
        if lines.iter().any(|line| line == username.as_str()) {
            return Ok(false);
        }
        self.append_line(USERS_FILE, username.as_str()).await?;
        Ok(true)
    }
}
