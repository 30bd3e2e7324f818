//! Urgency value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidUrgencyError;

/// How insistently a notification should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Auto-dismissed after the desktop's usual timeout
    #[default]
    Normal,
    /// Stays on screen until acknowledged, where the backend can express that
    Critical,
}

impl Urgency {
    /// Get the string identifier for this urgency
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Critical => "critical",
        }
    }

    pub const fn is_critical(&self) -> bool {
        matches!(self, Self::Critical)
    }
}

impl FromStr for Urgency {
    type Err = InvalidUrgencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "critical" => Ok(Self::Critical),
            _ => Err(InvalidUrgencyError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
