#![forbid(unsafe_code)]

pub mod admin_service;
pub mod answer_source;
pub mod app_services;
pub mod error;
pub mod leaderboard_service;
pub mod quiz;

pub use quiz_core::Clock;

pub use admin_service::AdminService;
pub use answer_source::{AnswerSource, InputError, ScriptedAnswers};
pub use app_services::AppServices;
pub use error::{AdminError, LeaderboardError, QuizError};
pub use leaderboard_service::{LEADERBOARD_SIZE, LeaderboardService};
pub use quiz::{
    LoginOutcome, QUIZ_DURATION_SECS, QuizLoopService, QuizOutcome, QuizPresenter, QuizSession,
    QuizStep,
};
