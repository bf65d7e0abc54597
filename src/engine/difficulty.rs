use enum_map::Enum;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// How fast the snake starts out
#[derive(Clone, Copy, Debug, Default, Deserialize, Enum, Eq, Hash, PartialEq)]
#[serde(from = "String")]
pub(crate) enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Time between ticks at the start of a game
    pub(crate) fn base_interval(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(200),
            Difficulty::Medium => Duration::from_millis(150),
            Difficulty::Hard => Duration::from_millis(100),
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// The number key that selects this difficulty
    pub(crate) fn key(self) -> char {
        match self {
            Difficulty::Easy => '1',
            Difficulty::Medium => '2',
            Difficulty::Hard => '3',
        }
    }

    /// Map a numeric level (1 through 3) to a difficulty.  Anything else is
    /// treated as [`Difficulty::Medium`].
    pub(crate) fn from_level(level: u8) -> Difficulty {
        match level {
            1 => Difficulty::Easy,
            2 => Difficulty::Medium,
            3 => Difficulty::Hard,
            _ => {
                log::warn!("Unknown difficulty level {level}; using Medium");
                Difficulty::Medium
            }
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Difficulty, ParseDifficultyError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_owned())),
        }
    }
}

/// Lenient conversion used when reading the configuration file: unknown
/// names fall back to [`Difficulty::Medium`].
impl From<String> for Difficulty {
    fn from(s: String) -> Difficulty {
        s.parse().unwrap_or_else(|e| {
            log::warn!("{e}; using Medium");
            Difficulty::Medium
        })
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid difficulty {0:?}: expected easy, medium, or hard")]
pub(crate) struct ParseDifficultyError(String);
