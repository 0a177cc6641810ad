//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{HistoryRecordError, UsernameError};
use storage::repository::StorageError;

use crate::answer_source::InputError;

/// Errors emitted by `QuizLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions available for a quiz")]
    EmptyBank,

    #[error("only one attempt is allowed per user")]
    AlreadyAttempted,

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Username(#[from] UsernameError),

    #[error(transparent)]
    History(#[from] HistoryRecordError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `LeaderboardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LeaderboardError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `AdminService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AdminError {
    #[error("correct option must be one of A, B, C, D")]
    InvalidCorrectOption,

    #[error(transparent)]
    Storage(#[from] StorageError),
}
