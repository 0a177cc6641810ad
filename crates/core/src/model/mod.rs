mod question;
mod records;

pub use question::{AnswerKey, OPTION_COUNT, Question, QuestionParseError};
pub use records::{
    HistoryParseError, HistoryRecord, HistoryRecordError, Username, UsernameError,
};
