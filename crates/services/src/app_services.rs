use std::sync::Arc;

use quiz_core::Clock;
use storage::repository::Storage;

use crate::admin_service::AdminService;
use crate::leaderboard_service::LeaderboardService;
use crate::quiz::QuizLoopService;

/// Assembles the app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    quiz_loop: Arc<QuizLoopService>,
    leaderboard: Arc<LeaderboardService>,
    admin: Arc<AdminService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, clock: Clock, admin_password: impl Into<String>) -> Self {
        let quiz_loop = Arc::new(QuizLoopService::new(
            clock,
            Arc::clone(&storage.questions),
            Arc::clone(&storage.users),
            Arc::clone(&storage.attempts),
            Arc::clone(&storage.history),
        ));
        let leaderboard = Arc::new(LeaderboardService::new(Arc::clone(&storage.history)));
        let admin = Arc::new(AdminService::new(
            Arc::clone(&storage.questions),
            Arc::clone(&storage.history),
            admin_password,
        ));

        Self {
            quiz_loop,
            leaderboard,
            admin,
        }
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    #[must_use]
    pub fn leaderboard(&self) -> Arc<LeaderboardService> {
        Arc::clone(&self.leaderboard)
    }

    #[must_use]
    pub fn admin(&self) -> Arc<AdminService> {
        Arc::clone(&self.admin)
    }
}
