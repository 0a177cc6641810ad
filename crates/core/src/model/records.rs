use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UsernameError {
    #[error("username must not be empty")]
    Empty,
}

/// Validated username: trimmed, non-empty. Doubles as the natural key for
/// the user registry and the attempt log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Trims and validates a raw username.
    ///
    /// # Errors
    ///
    /// Returns `UsernameError::Empty` if nothing remains after trimming.
    pub fn new(raw: &str) -> Result<Self, UsernameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Username {
    type Err = UsernameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HistoryRecordError {
    #[error("score ({score}) exceeds total ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HistoryParseError {
    #[error("line does not match the result pattern")]
    PatternMismatch,

    #[error(transparent)]
    Username(#[from] UsernameError),

    #[error(transparent)]
    Record(#[from] HistoryRecordError),
}

/// One persisted quiz result.
///
/// The structured fields are the in-memory representation; the
/// `"<username> scored <score>/<total> in <secs> sec"` sentence is only the
/// serialization format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    username: Username,
    score: u32,
    total: u32,
    time_taken_secs: u64,
}

impl HistoryRecord {
    /// Builds a record, enforcing `score <= total`.
    ///
    /// # Errors
    ///
    /// Returns `HistoryRecordError::ScoreExceedsTotal` when the invariant is
    /// violated.
    pub fn new(
        username: Username,
        score: u32,
        total: u32,
        time_taken_secs: u64,
    ) -> Result<Self, HistoryRecordError> {
        if score > total {
            return Err(HistoryRecordError::ScoreExceedsTotal { score, total });
        }
        Ok(Self {
            username,
            score,
            total,
            time_taken_secs,
        })
    }

    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn time_taken_secs(&self) -> u64 {
        self.time_taken_secs
    }

    /// Parses a persisted result sentence.
    ///
    /// Splits from the right so usernames containing spaces survive. A
    /// username containing the literal `" scored "` marker is ambiguous and
    /// will not round-trip, like `;` inside a question field.
    ///
    /// # Errors
    ///
    /// Returns `HistoryParseError::PatternMismatch` when the sentence shape or
    /// any numeric field does not parse.
    pub fn from_record_line(line: &str) -> Result<Self, HistoryParseError> {
        let rest = line
            .strip_suffix(" sec")
            .ok_or(HistoryParseError::PatternMismatch)?;
        let (left, secs) = rest
            .rsplit_once(" in ")
            .ok_or(HistoryParseError::PatternMismatch)?;
        let time_taken_secs: u64 = secs
            .parse()
            .map_err(|_| HistoryParseError::PatternMismatch)?;

        let (name, counts) = left
            .rsplit_once(" scored ")
            .ok_or(HistoryParseError::PatternMismatch)?;
        let (score, total) = counts
            .split_once('/')
            .ok_or(HistoryParseError::PatternMismatch)?;
        let score: u32 = score
            .parse()
            .map_err(|_| HistoryParseError::PatternMismatch)?;
        let total: u32 = total
            .parse()
            .map_err(|_| HistoryParseError::PatternMismatch)?;

        let username = Username::new(name)?;
        Ok(Self::new(username, score, total, time_taken_secs)?)
    }
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} scored {}/{} in {} sec",
            self.username, self.score, self.total, self.time_taken_secs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, score: u32, total: u32, secs: u64) -> HistoryRecord {
        HistoryRecord::new(Username::new(name).unwrap(), score, total, secs).unwrap()
    }

    #[test]
    fn sentence_round_trips() {
        let original = record("alice", 3, 5, 42);
        let line = original.to_string();
        assert_eq!(line, "alice scored 3/5 in 42 sec");
        assert_eq!(HistoryRecord::from_record_line(&line).unwrap(), original);
    }

    #[test]
    fn username_with_spaces_round_trips() {
        let original = record("a b c", 0, 4, 60);
        let parsed = HistoryRecord::from_record_line(&original.to_string()).unwrap();
        assert_eq!(parsed.username().as_str(), "a b c");
        assert_eq!(parsed, original);
    }

    #[test]
    fn score_above_total_is_rejected() {
        let err = HistoryRecord::new(Username::new("bob").unwrap(), 6, 5, 10).unwrap_err();
        assert_eq!(err, HistoryRecordError::ScoreExceedsTotal { score: 6, total: 5 });
    }

    #[test]
    fn malformed_sentences_do_not_parse() {
        for line in [
            "",
            "alice scored 3/5",
            "alice scored 3-5 in 42 sec",
            "alice 3/5 in 42 sec",
            "alice scored x/5 in 42 sec",
        ] {
            assert!(HistoryRecord::from_record_line(line).is_err(), "{line:?}");
        }
    }

    #[test]
    fn username_requires_content() {
        assert_eq!(Username::new("   ").unwrap_err(), UsernameError::Empty);
        assert_eq!(Username::new(" zoe ").unwrap().as_str(), "zoe");
    }
}
