//! Sufficiency rules for free-text answers.

/// Answers shorter than this (after trimming) are always considered poor.
pub const MIN_ANSWER_CHARS: usize = 25;

/// Returns true when the trimmed answer has fewer than `min_chars` characters.
#[must_use]
pub fn is_too_short(answer: &str, min_chars: usize) -> bool {
    answer.trim().chars().count() < min_chars
}

/// Interprets a model sufficiency verdict.
///
/// Only a case-insensitive `"false"` anywhere in the reply flags the answer.
/// Replies that say neither "true" nor "false" fall through as not poor.
#[must_use]
pub fn verdict_says_poor(reply: &str) -> bool {
    reply.trim().to_lowercase().contains("false")
}

/// Both halves of the "poor answer" predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnswerAssessment {
    pub too_short: bool,
    pub model_flagged: bool,
}

impl AnswerAssessment {
    #[must_use]
    pub fn is_poor(self) -> bool {
        self.too_short || self.model_flagged
    }
}
