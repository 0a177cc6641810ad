use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of options every question carries.
pub const OPTION_COUNT: usize = 4;

/// Fields in one persisted question record: text, four options, correct letter.
const RECORD_FIELDS: usize = OPTION_COUNT + 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionParseError {
    #[error("expected 6 fields, found {found}")]
    WrongFieldCount { found: usize },

    #[error("correct option must be one of A, B, C, D, got {raw:?}")]
    InvalidCorrectOption { raw: String },
}

/// Letter key identifying one of a question's four options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerKey {
    A,
    B,
    C,
    D,
}

impl AnswerKey {
    pub const ALL: [AnswerKey; OPTION_COUNT] = [Self::A, Self::B, Self::C, Self::D];

    /// Parses a single letter, case-insensitively.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }

    /// Position of this key in a question's option array.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for AnswerKey {
    type Err = QuestionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| {
                QuestionParseError::InvalidCorrectOption { raw: s.to_string() }
            }),
            _ => Err(QuestionParseError::InvalidCorrectOption { raw: s.to_string() }),
        }
    }
}

/// A multiple-choice question with exactly four options, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    text: String,
    options: [String; OPTION_COUNT],
    correct: AnswerKey,
}

impl Question {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct: AnswerKey,
    ) -> Self {
        Self {
            text: text.into(),
            options,
            correct,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn correct(&self) -> AnswerKey {
        self.correct
    }

    /// Grades a raw answer against this question.
    #[must_use]
    pub fn grade(&self, answer: &str) -> bool {
        crate::score::is_correct(answer, self.correct)
    }

    /// Parses one `text;optA;optB;optC;optD;letter` record line.
    ///
    /// # Errors
    ///
    /// Returns `QuestionParseError` on a wrong field count or a correct-option
    /// letter outside A-D. Loaders skip such lines rather than failing.
    pub fn from_record_line(line: &str) -> Result<Self, QuestionParseError> {
        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() != RECORD_FIELDS {
            return Err(QuestionParseError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let correct: AnswerKey = fields[RECORD_FIELDS - 1].parse()?;
        let options = [
            fields[1].to_string(),
            fields[2].to_string(),
            fields[3].to_string(),
            fields[4].to_string(),
        ];

        Ok(Self::new(fields[0], options, correct))
    }

    /// Renders the record line this question was loaded from.
    ///
    /// Field contents are written verbatim; a `;` inside any field will not
    /// round-trip.
    #[must_use]
    pub fn to_record_line(&self) -> String {
        format!(
            "{};{};{};{};{};{}",
            self.text,
            self.options[0],
            self.options[1],
            self.options[2],
            self.options[3],
            self.correct
        )
    }
}
