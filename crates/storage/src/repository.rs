use async_trait::async_trait;
use quiz_core::model::{HistoryRecord, Question, Username};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::flatfile::FlatFileRepository;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(String),

    #[error("lock poisoned: {0}")]
    Lock(String),
}

/// Append-only question bank.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Append one question record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be written.
    async fn append(&self, question: &Question) -> Result<(), StorageError>;

    /// Load every well-formed question in insertion order. Malformed records
    /// are skipped, not reported.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the log cannot be read.
    async fn load_all(&self) -> Result<Vec<Question>, StorageError>;
}

/// Registry of distinct usernames seen so far.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Register a username, deduplicated on write. Returns true when the
    /// username was new.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the registry cannot be read or written.
    async fn register(&self, username: &Username) -> Result<bool, StorageError>;
}

/// Append-only markers for used-up quiz attempts.
#[async_trait]
pub trait AttemptRepository: Send + Sync {
    /// Mark the username's single allowed attempt as used.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the marker cannot be written.
    async fn record(&self, username: &Username) -> Result<(), StorageError>;

    /// Linear scan for an existing attempt marker.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the log cannot be read.
    async fn has_attempted(&self, username: &Username) -> Result<bool, StorageError>;
}

/// Append-only score history.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Append one result record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be written.
    async fn append(&self, record: &HistoryRecord) -> Result<(), StorageError>;

    /// Load every well-formed record in insertion (chronological) order.
    /// Malformed records are skipped, not reported.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the log cannot be read.
    async fn load_all(&self) -> Result<Vec<HistoryRecord>, StorageError>;
}

fn poisoned<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::Lock(e.to_string())
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    questions: Arc<Mutex<Vec<Question>>>,
    users: Arc<Mutex<Vec<Username>>>,
    attempts: Arc<Mutex<Vec<Username>>>,
    history: Arc<Mutex<Vec<HistoryRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn append(&self, question: &Question) -> Result<(), StorageError> {
        let mut guard = self.questions.lock().map_err(poisoned)?;
        guard.push(question.clone());
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<Question>, StorageError> {
        let guard = self.questions.lock().map_err(poisoned)?;
        Ok(guard.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn register(&self, username: &Username) -> Result<bool, StorageError> {
        let mut guard = self.users.lock().map_err(poisoned)?;
        if guard.contains(username) {
            return Ok(false);
        }
        guard.push(username.clone());
        Ok(true)
    }
}

#[async_trait]
impl AttemptRepository for InMemoryRepository {
    async fn record(&self, username: &Username) -> Result<(), StorageError> {
        let mut guard = self.attempts.lock().map_err(poisoned)?;
        guard.push(username.clone());
        Ok(())
    }

    async fn has_attempted(&self, username: &Username) -> Result<bool, StorageError> {
        let guard = self.attempts.lock().map_err(poisoned)?;
        Ok(guard.contains(username))
    }
}

#[async_trait]
impl HistoryRepository for InMemoryRepository {
    async fn append(&self, record: &HistoryRecord) -> Result<(), StorageError> {
        let mut guard = self.history.lock().map_err(poisoned)?;
        guard.push(record.clone());
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<HistoryRecord>, StorageError> {
        let guard = self.history.lock().map_err(poisoned)?;
        Ok(guard.clone())
    }
}

/// Aggregates the four record sets behind trait objects for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
    pub users: Arc<dyn UserRepository>,
    pub attempts: Arc<dyn AttemptRepository>,
    pub history: Arc<dyn HistoryRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        Self {
            questions: Arc::new(repo.clone()),
            users: Arc::new(repo.clone()),
            attempts: Arc::new(repo.clone()),
            history: Arc::new(repo),
        }
    }

    /// Flat-file storage rooted at `dir`, one log per record set.
    #[must_use]
    pub fn flat_file(dir: impl Into<PathBuf>) -> Self {
        let repo = FlatFileRepository::new(dir);
        Self {
            questions: Arc::new(repo.clone()),
            users: Arc::new(repo.clone()),
            attempts: Arc::new(repo.clone()),
            history: Arc::new(repo),
        }
    }
}
