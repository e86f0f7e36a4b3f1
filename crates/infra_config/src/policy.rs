//! Policy enums selectable from configuration.

use serde::Deserialize;

/// What to do when the output file already exists and is non-empty.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    /// Ask on the terminal
    #[default]
    Prompt,
    /// Overwrite without asking
    Force,
    /// Refuse to overwrite
    Abort,
}

impl OverwritePolicy {
    /// Parse a policy name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "prompt" => Some(Self::Prompt),
            "force" => Some(Self::Force),
            "abort" => Some(Self::Abort),
            _ => None,
        }
    }
}

/// Handling of sentinel cells with no eligible neighbours.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmptyMode {
    /// Abort the run
    #[default]
    Fail,
    /// Leave the sentinel in place
    Keep,
    /// Write `fallback_value`
    Fallback,
}

impl EmptyMode {
    /// Parse a mode name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fail" => Some(Self::Fail),
            "keep" => Some(Self::Keep),
            "fallback" => Some(Self::Fallback),
            _ => None,
        }
    }
}
