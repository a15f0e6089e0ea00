//! Field positions a player can be listed under.
//!
//! Stored as text in `players.position` / `players.alternate_position`; the
//! database carries a matching CHECK constraint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The closed set of twelve field positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    GK,
    LB,
    CB,
    RB,
    CAM,
    CM,
    CDM,
    RM,
    LM,
    ST,
    RW,
    LW,
}

impl Position {
    /// Every position, in goal-to-attack order.
    pub const ALL: [Position; 12] = [
        Self::GK,
        Self::LB,
        Self::CB,
        Self::RB,
        Self::CAM,
        Self::CM,
        Self::CDM,
        Self::RM,
        Self::LM,
        Self::ST,
        Self::RW,
        Self::LW,
    ];

    /// Return the position code as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GK => "GK",
            Self::LB => "LB",
            Self::CB => "CB",
            Self::RB => "RB",
            Self::CAM => "CAM",
            Self::CM => "CM",
            Self::CDM => "CDM",
            Self::RM => "RM",
            Self::LM => "LM",
            Self::ST => "ST",
            Self::RW => "RW",
            Self::LW => "LW",
        }
    }
}

impl FromStr for Position {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(Position::as_str).collect();
                CoreError::Validation(format!(
                    "Invalid position '{s}'. Must be one of: {}",
                    valid.join(", ")
                ))
            })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_code() {
        for p in Position::ALL {
            assert_eq!(p.as_str().parse::<Position>().unwrap(), p);
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("cam".parse::<Position>().is_err());
    }

    #[test]
    fn unknown_code_lists_valid_values() {
        let err = "XX".parse::<Position>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'XX'"));
        assert!(msg.contains("GK"));
        assert!(msg.contains("LW"));
    }

    #[test]
    fn display_matches_stored_code() {
        assert_eq!(Position::CDM.to_string(), "CDM");
    }
}
