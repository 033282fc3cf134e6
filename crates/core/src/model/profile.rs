use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest score the profile prompt asks for.
pub const MAX_SCORE: u8 = 100;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileParseError {
    #[error("profile response has no score for {axis}")]
    MissingScore { axis: ProfileAxis },
}

//
// ─── AXIS ─────────────────────────────────────────────────────────────────────
//

/// One of the four scored pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileAxis {
    Environmental,
    Social,
    Governance,
    Risk,
}

impl ProfileAxis {
    pub const ALL: [ProfileAxis; 4] = [
        ProfileAxis::Environmental,
        ProfileAxis::Social,
        ProfileAxis::Governance,
        ProfileAxis::Risk,
    ];

    /// Label the model is asked to use, and the one shown to the user.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProfileAxis::Environmental => "Ambiental",
            ProfileAxis::Social => "Social",
            ProfileAxis::Governance => "Gobernanza",
            ProfileAxis::Risk => "Riesgo",
        }
    }

    fn pattern(self) -> &'static Regex {
        static ENVIRONMENTAL: LazyLock<Regex> = LazyLock::new(|| axis_regex("Ambiental"));
        static SOCIAL: LazyLock<Regex> = LazyLock::new(|| axis_regex("Social"));
        static GOVERNANCE: LazyLock<Regex> = LazyLock::new(|| axis_regex("Gobernanza"));
        static RISK: LazyLock<Regex> = LazyLock::new(|| axis_regex("Riesgo"));

        match self {
            ProfileAxis::Environmental => &ENVIRONMENTAL,
            ProfileAxis::Social => &SOCIAL,
            ProfileAxis::Governance => &GOVERNANCE,
            ProfileAxis::Risk => &RISK,
        }
    }
}

impl fmt::Display for ProfileAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// # Panics
///
/// Panics if the label produces an invalid pattern; labels are fixed literals.
fn axis_regex(label: &str) -> Regex {
    Regex::new(&format!(r"{}: (\d+)", regex::escape(label))).expect("axis pattern should compile")
}

//
// ─── PROFILE ──────────────────────────────────────────────────────────────────
//

/// Four 0-100 scores; 0 means no concern, 100 maximum concern or aversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsgProfile {
    pub environmental: u8,
    pub social: u8,
    pub governance: u8,
    pub risk: u8,
}

impl EsgProfile {
    /// Extracts the four `Label: number` scores from free text.
    ///
    /// The first occurrence of each label wins. Anything else in the text is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ProfileParseError::MissingScore` if any label is absent.
    /// Scores above [`MAX_SCORE`] saturate to it.
    pub fn parse(text: &str) -> Result<Self, ProfileParseError> {
        Ok(Self {
            environmental: extract_score(text, ProfileAxis::Environmental)?,
            social: extract_score(text, ProfileAxis::Social)?,
            governance: extract_score(text, ProfileAxis::Governance)?,
            risk: extract_score(text, ProfileAxis::Risk)?,
        })
    }

    #[must_use]
    pub fn score(&self, axis: ProfileAxis) -> u8 {
        match axis {
            ProfileAxis::Environmental => self.environmental,
            ProfileAxis::Social => self.social,
            ProfileAxis::Governance => self.governance,
            ProfileAxis::Risk => self.risk,
        }
    }

    /// Scores in chart order.
    #[must_use]
    pub fn scores(&self) -> [(ProfileAxis, u8); 4] {
        ProfileAxis::ALL.map(|axis| (axis, self.score(axis)))
    }

    #[must_use]
    pub fn summary_line(&self) -> String {
        self.scores()
            .iter()
            .map(|(axis, score)| format!("{axis}: {score}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn extract_score(text: &str, axis: ProfileAxis) -> Result<u8, ProfileParseError> {
    let raw = axis
        .pattern()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(ProfileParseError::MissingScore { axis })?;

    // Digits that overflow `u32` are far above the cap anyway.
    let score = raw.parse::<u32>().unwrap_or(u32::MAX).min(u32::from(MAX_SCORE));
    Ok(u8::try_from(score).unwrap_or(MAX_SCORE))
}
