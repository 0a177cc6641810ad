use async_trait::async_trait;
use quiz_core::model::Question;

use super::{FlatFileRepository, QUESTIONS_FILE};
use crate::repository::{QuestionRepository, StorageError};

#[async_trait]
impl QuestionRepository for FlatFileRepository {
    async fn append(&self, question: &Question) -> Result<(), StorageError> {
        self.append_line(QUESTIONS_FILE, &question.to_record_line())
            .await
    }

    async fn load_all(&self) -> Result<Vec<Question>, StorageError> {
        let lines = self.read_lines(QUESTIONS_FILE).await?;
        let mut questions = Vec::with_capacity(lines.len());
        for line in lines {
            match Question::from_record_line(&line) {
                Ok(question) => questions.push(question),
                Err(err) => tracing::debug!(%err, "skipping malformed question record"),
            }
        }
        Ok(questions)
    }
}
