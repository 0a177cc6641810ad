use std::sync::Arc;

use quiz_core::model::{AnswerKey, HistoryRecord, OPTION_COUNT, Question};
use storage::repository::{HistoryRepository, QuestionRepository};

use crate::error::AdminError;

/// Thin CRUD over the record store, gated by a shared secret.
#[derive(Clone)]
pub struct AdminService {
    questions: Arc<dyn QuestionRepository>,
    history: Arc<dyn HistoryRepository>,
    password: String,
}

impl AdminService {
    #[must_use]
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        history: Arc<dyn HistoryRepository>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            questions,
            history,
            password: password.into(),
        }
    }

    /// Exact string comparison against the configured secret.
    #[must_use]
    pub fn verify_password(&self, candidate: &str) -> bool {
        candidate == self.password
    }

    /// Validates and appends one question. The bank is untouched when the
    /// correct-option letter is rejected.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::InvalidCorrectOption` for a letter outside A-D,
    /// or `AdminError::Storage` if the append fails.
    pub async fn add_question(
        &self,
        text: &str,
        options: [String; OPTION_COUNT],
        correct: &str,
    ) -> Result<(), AdminError> {
        let correct: AnswerKey = correct
            .parse()
            .map_err(|_| AdminError::InvalidCorrectOption)?;
        self.questions
            .append(&Question::new(text, options, correct))
            .await?;
        Ok(())
    }

    /// Every question in the bank, insertion order.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Storage` if the bank cannot be read.
    pub async fn list_questions(&self) -> Result<Vec<Question>, AdminError> {
        Ok(self.questions.load_all().await?)
    }

    /// Every history record, chronological order.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Storage` if the history cannot be read.
    pub async fn list_results(&self) -> Result<Vec<HistoryRecord>, AdminError> {
        Ok(self.history.load_all().await?)
    }
}
