//! Action keywords accepted at the main prompt

use std::fmt;

/// Operator-chosen action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Register a new animal with its fee
    Add,
    /// Report the fee of an animal
    Fee,
    /// End the session
    Exit,
    /// Anything else, kept as typed (after normalisation)
    Unknown(String),
}

impl Action {
    /// Parse an action keyword, ignoring case and surrounding whitespace
    pub fn parse(input: &str) -> Self {
        let normalised = input.trim().to_lowercase();
        match normalised.as_str() {
            "add" => Self::Add,
            "fee" => Self::Fee,
            "exit" => Self::Exit,
            _ => Self::Unknown(normalised),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Fee => write!(f, "fee"),
            Self::Exit => write!(f, "exit"),
            Self::Unknown(other) => write!(f, "{other}"),
        }
    }
}
