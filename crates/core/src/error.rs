use thiserror::Error;

use crate::model::{HistoryParseError, QuestionParseError, UsernameError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionParseError),
    #[error(transparent)]
    History(#[from] HistoryParseError),
    #[error(transparent)]
    Username(#[from] UsernameError),
}
