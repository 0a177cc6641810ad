//! Flat-file record store: one append-only, line-oriented UTF-8 log per
//! record set, no header, no delimiter escaping.

mod attempt_repo;
mod history_repo;
mod question_repo;
mod user_repo;

use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::repository::StorageError;

pub(crate) const QUESTIONS_FILE: &str = "questions.txt";
pub(crate) const USERS_FILE: &str = "users.txt";
pub(crate) const ATTEMPTS_FILE: &str = "attempts.txt";
pub(crate) const HISTORY_FILE: &str = "history.txt";

fn io_err(e: std::io::Error) -> StorageError {
    StorageError::Io(e.to_string())
}

/// Record store rooted at a data directory, one text log per record set.
#[derive(Debug, Clone)]
pub struct FlatFileRepository {
    dir: PathBuf,
}

impl FlatFileRepository {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    /// Append one line to the named log, creating the directory and file on
    /// first write.
    pub(crate) async fn append_line(&self, file: &str, line: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).await.map_err(io_err)?;
        let mut log = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path(file))
            .await
            .map_err(io_err)?;
        log.write_all(format!("{line}\n").as_bytes())
            .await
            .map_err(io_err)?;
        Ok(())
    }

    /// Read every line of the named log. A missing file reads as an empty
    /// log, matching append-only semantics where nothing has been written yet.
    pub(crate) async fn read_lines(&self, file: &str) -> Result<Vec<String>, StorageError> {
        match fs::read_to_string(self.path(file)).await {
            Ok(contents) => Ok(contents.lines().map(str::to_string).collect()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(io_err(e)),
        }
    }
}
