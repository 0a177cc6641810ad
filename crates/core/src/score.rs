//! Pure answer grading.

use crate::model::AnswerKey;

/// Returns true when the trimmed answer is exactly one character and matches
/// the correct option letter, case-insensitively.
///
/// Anything else (empty input, extra characters, a different letter) grades
/// as incorrect; grading never fails.
#[must_use]
pub fn is_correct(answer: &str, correct: AnswerKey) -> bool {
    let mut chars = answer.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_ascii_uppercase() == correct.as_char(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_and_lowercase_matches() {
        assert!(is_correct("B", AnswerKey::B));
        assert!(is_correct("b", AnswerKey::B));
        assert!(is_correct("  b \n", AnswerKey::B));
    }

    #[test]
    fn rejects_non_single_character_answers() {
        assert!(!is_correct("", AnswerKey::A));
        assert!(!is_correct("   ", AnswerKey::A));
        assert!(!is_correct("AB", AnswerKey::A));
        assert!(!is_correct("A B", AnswerKey::A));
    }

    #[test]
    fn rejects_wrong_letters() {
        assert!(!is_correct("C", AnswerKey::D));
        assert!(!is_correct("E", AnswerKey::A));
        assert!(!is_correct("1", AnswerKey::A));
    }
}
