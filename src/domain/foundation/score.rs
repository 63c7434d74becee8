//! Score value object for interview feedback (1 to 10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Interview score, always within `Score::MIN..=Score::MAX`.
///
/// Arithmetic saturates at the bounds instead of failing, so no sequence of
/// adjustments can push a score outside the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Starting point for communication and technical scores.
    pub const NEUTRAL: Score = Score(5);

    /// Creates a Score, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::out_of_range(
                "score",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            ))
        }
    }

    /// Creates a Score, clamping into range.
    pub fn clamped(value: i32) -> Self {
        Self(value.clamp(Self::MIN as i32, Self::MAX as i32) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// One point higher, capped at 10.
    pub fn raised(self) -> Self {
        Self::clamped(self.0 as i32 + 1)
    }

    /// One point lower, floored at 1.
    pub fn lowered(self) -> Self {
        Self::clamped(self.0 as i32 - 1)
    }

    /// Arithmetic mean of two scores, halves rounded up.
    pub fn mean(a: Score, b: Score) -> Self {
        Self::clamped((a.0 as i32 + b.0 as i32 + 1) / 2)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<u8> for Score {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}
