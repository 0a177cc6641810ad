use chrono::{DateTime, Duration, Utc};

use quiz_core::model::{Question, Username};
use quiz_core::time::Deadline;

/// What the session wants to do next.
#[derive(Debug, PartialEq, Eq)]
pub enum QuizStep<'a> {
    /// Present this question and wait for an answer.
    Present {
        number: usize,
        total: usize,
        question: &'a Question,
    },
    /// The deadline passed between questions; nothing was presented.
    Expired,
    /// Every question has been asked.
    Finished,
}

/// Result of one session, however it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: u32,
    pub total_presented: u32,
    pub elapsed_secs: u64,
    pub timed_out: bool,
}

/// Deadline-driven state machine for one user's quiz run.
///
/// Holds the shuffled questions and the single wall-clock deadline. Every
/// step takes `now` from the caller, so both expiry edges (between questions
/// and mid-input-wait) are reachable in tests without sleeping.
///
/// The session never persists anything; the caller turns the outcome into a
/// history record and an attempt marker.
#[derive(Debug)]
pub struct QuizSession {
    username: Username,
    questions: Vec<Question>,
    deadline: Deadline,
    score: u32,
    presented: u32,
    timed_out: bool,
}

impl QuizSession {
    /// Opens a session over an already-shuffled bank with a window of
    /// `budget` starting at `now`.
    #[must_use]
    pub fn begin(
        username: Username,
        questions: Vec<Question>,
        now: DateTime<Utc>,
        budget: Duration,
    ) -> Self {
        Self {
            username,
            questions,
            deadline: Deadline::starting(now, budget),
            score: 0,
            presented: 0,
            timed_out: false,
        }
    }

    /// Decides what happens next: present the next question, stop on an
    /// expired deadline, or finish after the last question.
    ///
    /// The deadline check runs before each presentation. A presented question
    /// counts toward `total_presented` immediately; one rejected by the check
    /// does not.
    pub fn next_step(&mut self, now: DateTime<Utc>) -> QuizStep<'_> {
        let index = self.presented as usize;
        if index >= self.questions.len() {
            return QuizStep::Finished;
        }
        if self.deadline.is_expired(now) {
            self.timed_out = true;
            return QuizStep::Expired;
        }

        self.presented += 1;
        QuizStep::Present {
            number: index + 1,
            total: self.questions.len(),
            question: &self.questions[index],
        }
    }

    /// Fresh wait budget for the answer to the question just presented.
    ///
    /// Recomputed from the deadline rather than reused from the presentation
    /// check, since presenting itself consumes time. Clamped to zero.
    #[must_use]
    pub fn answer_budget(&self, now: DateTime<Utc>) -> std::time::Duration {
        self.deadline.remaining(now).to_std().unwrap_or_default()
    }

    /// Grades the answer to the most recently presented question. Any input
    /// that is not exactly the correct letter counts as incorrect.
    pub fn submit_answer(&mut self, answer: &str) -> bool {
        let Some(index) = (self.presented as usize).checked_sub(1) else {
            return false;
        };
        let correct = self.questions[index].grade(answer);
        if correct {
            self.score += 1;
        }
        correct
    }

    /// The wait for an answer was abandoned by the deadline.
    pub fn record_timeout(&mut self) {
        self.timed_out = true;
    }

    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Time left on the session deadline, for user feedback.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        self.deadline.remaining(now)
    }

    /// Consumes the session into its outcome, with elapsed whole seconds
    /// truncated.
    #[must_use]
    pub fn finish(self, now: DateTime<Utc>) -> QuizOutcome {
        QuizOutcome {
            score: self.score,
            total_presented: self.presented,
            elapsed_secs: self.deadline.elapsed_secs(now),
            timed_out: self.timed_out,
        }
    }
}
