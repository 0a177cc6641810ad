mod loop_service;
mod presenter;
mod session;

pub use loop_service::{LoginOutcome, QUIZ_DURATION_SECS, QuizLoopService};
pub use presenter::QuizPresenter;
pub use session::{QuizOutcome, QuizSession, QuizStep};
