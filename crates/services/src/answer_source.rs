//! The input seam of the timed quiz loop.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// The input source went away (stdin closed, reader thread gone) and no
/// further answers can arrive.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("input source closed: {0}")]
pub struct InputError(pub String);

/// Where quiz answers come from. Whoever holds the `&mut` owns the terminal
/// for the duration of the session.
#[async_trait]
pub trait AnswerSource: Send {
    /// Wait up to `budget` for one line of input.
    ///
    /// Returns `Ok(None)` when the budget elapses first: the wait is
    /// abandoned, never blocked past the budget, and a zero budget is an
    /// immediate timeout. Implementations may be unable to interrupt the
    /// underlying blocking read; a line produced after abandonment must be
    /// discarded, not surfaced by a later call.
    ///
    /// # Errors
    ///
    /// Returns `InputError` when the source can no longer produce input.
    async fn next_line(&mut self, budget: Duration) -> Result<Option<String>, InputError>;

    /// Discard anything already buffered, such as an answer that arrived
    /// after its wait was abandoned.
    fn discard_pending(&mut self);
}

/// Scripted input for tests and prototyping: `Some` entries are answers,
/// `None` entries simulate an elapsed budget. An exhausted script also reads
/// as a timeout.
#[derive(Debug, Default)]
pub struct ScriptedAnswers {
    replies: VecDeque<Option<String>>,
}

impl ScriptedAnswers {
    #[must_use]
    pub fn new(replies: impl IntoIterator<Item = Option<String>>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
        }
    }

    /// Script in which every entry is an answer.
    #[must_use]
    pub fn answering<'a>(answers: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(answers.into_iter().map(|answer| Some(answer.to_string())))
    }
}

#[async_trait]
impl AnswerSource for ScriptedAnswers {
    async fn next_line(&mut self, _budget: Duration) -> Result<Option<String>, InputError> {
        Ok(self.replies.pop_front().flatten())
    }

    fn discard_pending(&mut self) {}
}
