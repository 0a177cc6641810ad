use std::io::Write;

use quiz_core::model::{AnswerKey, HistoryRecord, Question, Username};
use storage::flatfile::FlatFileRepository;
use storage::repository::{
    AttemptRepository, HistoryRepository, QuestionRepository, UserRepository,
};

fn sample_question(n: u32) -> Question {
    Question::new(
        format!("Question {n}?"),
        [
            "A. first".to_string(),
            "B. second".to_string(),
            "C. third".to_string(),
            "D. fourth".to_string(),
        ],
        AnswerKey::D,
    )
}

fn append_raw_line(dir: &std::path::Path, file: &str, line: &str) {
    let mut log = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(file))
        .unwrap();
    writeln!(log, "{line}").unwrap();
}

#[tokio::test]
async fn questions_round_trip_and_malformed_lines_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FlatFileRepository::new(dir.path());

    QuestionRepository::append(&repo, &sample_question(1))
        .await
        .unwrap();
    QuestionRepository::append(&repo, &sample_question(2))
        .await
        .unwrap();
    append_raw_line(dir.path(), "questions.txt", "too;few;fields");
    append_raw_line(dir.path(), "questions.txt", "t;a;b;c;d;Z");
    QuestionRepository::append(&repo, &sample_question(3))
        .await
        .unwrap();

    let loaded = QuestionRepository::load_all(&repo).await.unwrap();
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded[0].text(), "Question 1?");
    assert_eq!(loaded[2].text(), "Question 3?");
}

#[tokio::test]
async fn user_registry_deduplicates_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FlatFileRepository::new(dir.path());
    let alice = Username::new("alice").unwrap();

    assert!(repo.register(&alice).await.unwrap());
    assert!(!repo.register(&alice).await.unwrap());
    assert!(repo.register(&Username::new("bob").unwrap()).await.unwrap());

    let contents = std::fs::read_to_string(dir.path().join("users.txt")).unwrap();
    assert_eq!(contents, "alice\nbob\n");
}

#[tokio::test]
async fn attempt_marker_blocks_on_scan() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FlatFileRepository::new(dir.path());
    let carol = Username::new("carol").unwrap();

    assert!(!repo.has_attempted(&carol).await.unwrap());
    repo.record(&carol).await.unwrap();
    assert!(repo.has_attempted(&carol).await.unwrap());
    assert!(
        !repo
            .has_attempted(&Username::new("dave").unwrap())
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn history_round_trips_in_chronological_order() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FlatFileRepository::new(dir.path());

    let first = HistoryRecord::new(Username::new("erin").unwrap(), 4, 5, 31).unwrap();
    let second = HistoryRecord::new(Username::new("frank").unwrap(), 2, 5, 58).unwrap();
    HistoryRepository::append(&repo, &first).await.unwrap();
    append_raw_line(dir.path(), "history.txt", "not a result sentence");
    HistoryRepository::append(&repo, &second).await.unwrap();

    let loaded = HistoryRepository::load_all(&repo).await.unwrap();
    assert_eq!(loaded, vec![first, second]);
}

#[tokio::test]
async fn missing_logs_read_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FlatFileRepository::new(dir.path());

    assert!(QuestionRepository::load_all(&repo).await.unwrap().is_empty());
    assert!(HistoryRepository::load_all(&repo).await.unwrap().is_empty());
    assert!(
        !repo
            .has_attempted(&Username::new("nobody").unwrap())
            .await
            .unwrap()
    );
}
