use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Duration;
use quiz_core::model::{AnswerKey, Question};
use quiz_core::time::fixed_clock;
use services::{Clock, QuizError, QuizLoopService, QuizPresenter, ScriptedAnswers};
use storage::repository::{AttemptRepository, HistoryRepository, InMemoryRepository, QuestionRepository};

#[derive(Default)]
struct RecordingPresenter {
    questions_shown: usize,
    time_up_between: bool,
    time_up_waiting: bool,
}

impl QuizPresenter for RecordingPresenter {
    fn show_question(&mut self, _number: usize, _total: usize, _question: &Question) {
        self.questions_shown += 1;
    }

    fn show_remaining(&mut self, _remaining: StdDuration) {}

    fn time_up_between_questions(&mut self) {
        self.time_up_between = true;
    }

    fn time_up_waiting(&mut self) {
        self.time_up_waiting = true;
    }
}

async fn seed_questions(repo: &InMemoryRepository, count: u32) {
    for i in 1..=count {
        let question = Question::new(
            format!("Q{i}"),
            [
                "A. a".to_string(),
                "B. b".to_string(),
                "C. c".to_string(),
                "D. d".to_string(),
            ],
            AnswerKey::B,
        );
        QuestionRepository::append(repo, &question).await.unwrap();
    }
}

fn quiz_service(repo: &InMemoryRepository, clock: Clock) -> QuizLoopService {
    QuizLoopService::new(
        clock,
        Arc::new(repo.clone()),
        Arc::new(repo.clone()),
        Arc::new(repo.clone()),
        Arc::new(repo.clone()),
    )
}

#[tokio::test]
async fn full_session_persists_history_and_blocks_a_second_attempt() {
    let repo = InMemoryRepository::new();
    seed_questions(&repo, 3).await;
    let service = quiz_service(&repo, fixed_clock());

    let login = service.login("alice").await.unwrap();
    assert!(login.newly_registered);

    let mut source = ScriptedAnswers::answering(["B", "x", "b"]);
    let mut presenter = RecordingPresenter::default();
    let outcome = service
        .run_quiz(login.username, &mut source, &mut presenter)
        .await
        .unwrap();

    assert_eq!(outcome.score, 2);
    assert_eq!(outcome.total_presented, 3);
    assert!(!outcome.timed_out);
    assert_eq!(presenter.questions_shown, 3);

    let history = HistoryRepository::load_all(&repo).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].to_string(), "alice scored 2/3 in 0 sec");

    let err = service.login("alice").await.unwrap_err();
    assert!(matches!(err, QuizError::AlreadyAttempted));
}

#[tokio::test]
async fn timeout_mid_wait_stops_the_loop_and_keeps_prior_score() {
    let repo = InMemoryRepository::new();
    seed_questions(&repo, 3).await;
    let service = quiz_service(&repo, fixed_clock());

    let login = service.login("bob").await.unwrap();
    let mut source = ScriptedAnswers::new([Some("B".to_string()), None]);
    let mut presenter = RecordingPresenter::default();
    let outcome = service
        .run_quiz(login.username, &mut source, &mut presenter)
        .await
        .unwrap();

    assert_eq!(outcome.score, 1);
    assert_eq!(outcome.total_presented, 2);
    assert!(outcome.timed_out);
    assert_eq!(presenter.questions_shown, 2);
    assert!(presenter.time_up_waiting);
    assert!(!presenter.time_up_between);

    let history = HistoryRepository::load_all(&repo).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].score(), 1);
    assert_eq!(history[0].total(), 2);
}

#[tokio::test]
async fn already_expired_deadline_presents_no_questions() {
    let repo = InMemoryRepository::new();
    seed_questions(&repo, 5).await;
    let service = quiz_service(&repo, fixed_clock()).with_duration(Duration::zero());

    let login = service.login("carol").await.unwrap();
    let mut source = ScriptedAnswers::answering(["B"]);
    let mut presenter = RecordingPresenter::default();
    let outcome = service
        .run_quiz(login.username, &mut source, &mut presenter)
        .await
        .unwrap();

    assert_eq!(outcome.total_presented, 0);
    assert_eq!(outcome.score, 0);
    assert!(outcome.timed_out);
    assert_eq!(presenter.questions_shown, 0);
    assert!(presenter.time_up_between);

    // Partial results persist even when nothing was presented.
    let history = HistoryRepository::load_all(&repo).await.unwrap();
    assert_eq!(history.len(), 1);
    assert!(repo
        .has_attempted(&history[0].username().clone())
        .await
        .unwrap());
}

#[tokio::test]
async fn empty_bank_aborts_before_recording_anything() {
    let repo = InMemoryRepository::new();
    let service = quiz_service(&repo, fixed_clock());

    let login = service.login("dave").await.unwrap();
    let mut source = ScriptedAnswers::default();
    let mut presenter = RecordingPresenter::default();
    let err = service
        .run_quiz(login.username.clone(), &mut source, &mut presenter)
        .await
        .unwrap_err();

    assert!(matches!(err, QuizError::EmptyBank));
    assert!(HistoryRepository::load_all(&repo).await.unwrap().is_empty());
    assert!(!repo.has_attempted(&login.username).await.unwrap());
}

#[tokio::test]
async fn login_validates_and_registers_once() {
    let repo = InMemoryRepository::new();
    let service = quiz_service(&repo, fixed_clock());

    assert!(matches!(
        service.login("   ").await.unwrap_err(),
        QuizError::Username(_)
    ));

    assert!(service.login("erin").await.unwrap().newly_registered);
    // No quiz was run, so no attempt marker blocks a second login.
    assert!(!service.login("erin").await.unwrap().newly_registered);
}
