//! Terminal input handle.
//!
//! A dedicated reader thread owns stdin and forwards whole lines into an
//! unbounded channel; the async side joins that channel with a timer. The
//! thread cannot be interrupted mid-read, so after an abandoned wait it may
//! still deliver one more line; `discard_pending` throws buffered lines away
//! before the next prompt.

use std::io::BufRead;
use std::time::Duration;

use async_trait::async_trait;
use services::{AnswerSource, InputError};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::time::timeout;

fn closed() -> InputError {
    InputError("stdin closed".to_string())
}

/// The single owned handle to terminal input. Components take it by `&mut`,
/// making ownership transfer at session boundaries explicit.
pub struct Console {
    lines: UnboundedReceiver<String>,
}

impl Console {
    /// Spawns the stdin reader thread and returns the handle.
    ///
    /// # Errors
    ///
    /// Returns `std::io::Error` if the thread cannot be spawned.
    pub fn new() -> std::io::Result<Self> {
        let (tx, lines) = mpsc::unbounded_channel();
        std::thread::Builder::new()
            .name("stdin-reader".into())
            .spawn(move || {
                let stdin = std::io::stdin();
                for line in stdin.lock().lines() {
                    let Ok(line) = line else { break };
                    if tx.send(line).is_err() {
                        break;
                    }
                }
            })?;
        Ok(Self { lines })
    }

    /// Reads one line with no deadline, for menu prompts.
    ///
    /// # Errors
    ///
    /// Returns `InputError` when stdin has closed.
    pub async fn read_line(&mut self) -> Result<String, InputError> {
        self.lines.recv().await.ok_or_else(closed)
    }
}

#[async_trait]
impl AnswerSource for Console {
    async fn next_line(&mut self, budget: Duration) -> Result<Option<String>, InputError> {
        // A spent budget must not consume a buffered line.
        if budget.is_zero() {
            return Ok(None);
        }
        match timeout(budget, self.lines.recv()).await {
            Err(_elapsed) => Ok(None),
            Ok(Some(line)) => Ok(Some(line)),
            Ok(None) => Err(closed()),
        }
    }

    fn discard_pending(&mut self) {
        while self.lines.try_recv().is_ok() {}
    }
}
