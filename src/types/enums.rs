//! Enumeration types for the room allocator
//!
//! This module contains the selection tiers reported in booking confirmations
//! and the output formats supported by the command line front-end.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which search tier produced a room selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionTier {
    /// All rooms share one floor (priority 1)
    SameFloor,
    /// Rooms form a cluster spanning several floors (priority 2)
    CrossFloor,
}

impl fmt::Display for SelectionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionTier::SameFloor => write!(f, "Same Floor"),
            SelectionTier::CrossFloor => write!(f, "Cross Floor"),
        }
    }
}

impl FromStr for SelectionTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "same floor" | "samefloor" | "same-floor" => Ok(SelectionTier::SameFloor),
            "cross floor" | "crossfloor" | "cross-floor" => Ok(SelectionTier::CrossFloor),
            _ => Err(format!("Unknown selection tier: {}", s)),
        }
    }
}

/// Output format for the command line front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human readable messages and a text room grid
    Text,
    /// JSON documents for confirmations and inventory snapshots
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "TEXT"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
