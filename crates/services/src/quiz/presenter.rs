use std::time::Duration;

use quiz_core::model::Question;

/// Presentation surface of a running quiz.
///
/// Implementations receive data, not pre-formatted strings, and decide the
/// rendering themselves; services never print.
pub trait QuizPresenter {
    /// A question is being presented to the user.
    fn show_question(&mut self, number: usize, total: usize, question: &Question);

    /// Time left after an answered question. Feedback only, no control-flow
    /// effect.
    fn show_remaining(&mut self, remaining: Duration);

    /// The deadline passed between questions; the next one was not presented.
    fn time_up_between_questions(&mut self);

    /// The deadline passed while waiting for an answer.
    fn time_up_waiting(&mut self);
}
