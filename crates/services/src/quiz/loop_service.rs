use std::sync::Arc;

use chrono::Duration;
use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::Clock;
use quiz_core::model::{HistoryRecord, Username};
use storage::repository::{
    AttemptRepository, HistoryRepository, QuestionRepository, UserRepository,
};

use crate::answer_source::AnswerSource;
use crate::error::QuizError;
use crate::quiz::presenter::QuizPresenter;
use crate::quiz::session::{QuizOutcome, QuizSession, QuizStep};

/// Wall-clock budget for one quiz session, in seconds.
pub const QUIZ_DURATION_SECS: i64 = 60;

/// Outcome of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub username: Username,
    pub newly_registered: bool,
}

/// Orchestrates the single-attempt gate, the timed question loop, and result
/// persistence.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    questions: Arc<dyn QuestionRepository>,
    users: Arc<dyn UserRepository>,
    attempts: Arc<dyn AttemptRepository>,
    history: Arc<dyn HistoryRepository>,
    duration: Duration,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(
        clock: Clock,
        questions: Arc<dyn QuestionRepository>,
        users: Arc<dyn UserRepository>,
        attempts: Arc<dyn AttemptRepository>,
        history: Arc<dyn HistoryRepository>,
    ) -> Self {
        Self {
            clock,
            questions,
            users,
            attempts,
            history,
            duration: Duration::seconds(QUIZ_DURATION_SECS),
        }
    }

    /// Overrides the session budget. Intended for tests.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Validates a raw username, enforces the single-attempt rule, and
    /// registers the user.
    ///
    /// The attempt check and the eventual marker write are not atomic; with
    /// one interactive session at a time that race cannot occur.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AlreadyAttempted` when an attempt marker exists,
    /// `QuizError::Username` for an empty name, or `QuizError::Storage`.
    pub async fn login(&self, raw_username: &str) -> Result<LoginOutcome, QuizError> {
        let username = Username::new(raw_username)?;
        if self.attempts.has_attempted(&username).await? {
            return Err(QuizError::AlreadyAttempted);
        }
        let newly_registered = self.users.register(&username).await?;
        Ok(LoginOutcome {
            username,
            newly_registered,
        })
    }

    /// Runs one timed session and persists its result.
    ///
    /// The session stops at the first of: bank exhausted, deadline expired
    /// between questions, or the answer wait abandoned by the deadline. The
    /// partial result of a timed-out session is still persisted; an empty
    /// bank aborts before anything is recorded.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyBank` when no questions load,
    /// `QuizError::Input` when the answer source dies, or
    /// `QuizError::Storage` on persistence failures.
    pub async fn run_quiz(
        &self,
        username: Username,
        source: &mut dyn AnswerSource,
        presenter: &mut dyn QuizPresenter,
    ) -> Result<QuizOutcome, QuizError> {
        let mut bank = self.questions.load_all().await?;
        if bank.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        bank.as_mut_slice().shuffle(&mut rng());

        let mut session =
            QuizSession::begin(username.clone(), bank, self.clock.now(), self.duration);

        loop {
            match session.next_step(self.clock.now()) {
                QuizStep::Finished => break,
                QuizStep::Expired => {
                    presenter.time_up_between_questions();
                    break;
                }
                QuizStep::Present {
                    number,
                    total,
                    question,
                } => presenter.show_question(number, total, question),
            }

            // Fresh budget: presenting the question consumed time too.
            let budget = session.answer_budget(self.clock.now());
            match source.next_line(budget).await? {
                None => {
                    session.record_timeout();
                    presenter.time_up_waiting();
                    break;
                }
                Some(answer) => {
                    session.submit_answer(&answer);
                    presenter.show_remaining(session.answer_budget(self.clock.now()));
                }
            }
        }

        let outcome = session.finish(self.clock.now());
        tracing::info!(
            user = %username,
            score = outcome.score,
            presented = outcome.total_presented,
            elapsed_secs = outcome.elapsed_secs,
            timed_out = outcome.timed_out,
            "quiz session finished"
        );

        let record = HistoryRecord::new(
            username.clone(),
            outcome.score,
            outcome.total_presented,
            outcome.elapsed_secs,
        )?;
        self.history.append(&record).await?;
        self.attempts.record(&username).await?;

        Ok(outcome)
    }
}
