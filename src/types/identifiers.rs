//! Identifier types for the room allocator
//!
//! Room identifiers are derived from a room's position in the building, so the
//! same room keeps the same identifier across regenerations. Inventory epochs
//! use UUIDs because every regeneration must be distinguishable.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of a room, derived from its floor and corridor index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId {
    floor: u32,
    index: u32,
}

impl RoomId {
    /// Create the identifier for the room at `index` on `floor`
    pub fn new(floor: u32, index: u32) -> Self {
        Self { floor, index }
    }

    /// Floor component of the identifier
    pub fn floor(&self) -> u32 {
        self.floor
    }

    /// Corridor index component of the identifier
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.floor, self.index)
    }
}

impl FromStr for RoomId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (floor, index) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid room id '{}': expected <floor>-<index>", s))?;
        let floor = floor
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("Invalid floor in room id '{}': {}", s, e))?;
        let index = index
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("Invalid index in room id '{}': {}", s, e))?;
        Ok(Self::new(floor, index))
    }
}

impl Serialize for RoomId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RoomId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Unique identifier for one generated inventory (a building "epoch")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EpochId(pub Uuid);

impl EpochId {
    /// Create a new random epoch ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EpochId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EpochId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPOCH_{}", self.0.simple())
    }
}

impl Serialize for EpochId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("EPOCH_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for EpochId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let raw = s.strip_prefix("EPOCH_").unwrap_or(&s);
        let uuid = Uuid::parse_str(raw).map_err(serde::de::Error::custom)?;
        Ok(EpochId(uuid))
    }
}
