//! Difficulty levels and their number ranges

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Numbers a round at this level may ask for
    pub fn range(&self) -> RangeInclusive<u32> {
        match self {
            Difficulty::Easy => 1..=5,
            Difficulty::Medium => 1..=10,
            Difficulty::Hard => 1..=20,
        }
    }
    
    pub fn contains(&self, n: u32) -> bool {
        self.range().contains(&n)
    }
    
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;
    
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_ranges() {
        assert!(Difficulty::Easy.contains(5));
        assert!(!Difficulty::Easy.contains(6));
        assert!(Difficulty::Medium.contains(10));
        assert!(Difficulty::Hard.contains(20));
        assert!(!Difficulty::Hard.contains(0));
    }
    
    #[test]
    fn test_parse() {
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("insane".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
