use serde::{Deserialize, Serialize};

/// Who wrote a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    Bot,
    User,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
}

/// Ordered chat history for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            speaker: Speaker::Bot,
            text: text.into(),
        });
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            speaker: Speaker::User,
            text: text.into(),
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    /// True if the bot already said exactly `text`.
    #[must_use]
    pub fn contains_bot_text(&self, text: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.speaker == Speaker::Bot && entry.text == text)
    }

    /// Number of bot lines equal to `text`.
    #[must_use]
    pub fn count_bot_text(&self, text: &str) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.speaker == Speaker::Bot && entry.text == text)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bot_lookup_ignores_user_lines() {
        let mut transcript = Transcript::new();
        transcript.push_user("hola");
        assert!(!transcript.contains_bot_text("hola"));

        transcript.push_bot("hola");
        assert!(transcript.contains_bot_text("hola"));
        assert_eq!(transcript.count_bot_text("hola"), 1);
        assert_eq!(transcript.len(), 2);
    }
}
