use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four fixed entity kinds shared by both models.
///
/// Entity identity is the name, unique within its kind per model. An Arc may
/// additionally be the distinguished narrative arc marking which events
/// represent the authored story.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Arc,
    Character,
    Location,
    Item,
}

impl EntityKind {
    /// All kinds, in a fixed order suitable for deterministic iteration.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Arc,
        EntityKind::Character,
        EntityKind::Location,
        EntityKind::Item,
    ];
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arc => write!(f, "arc"),
            Self::Character => write!(f, "character"),
            Self::Location => write!(f, "location"),
            Self::Item => write!(f, "item"),
        }
    }
}

/// Error returned when parsing an unknown entity kind name.
#[derive(Debug, thiserror::Error)]
#[error("unknown entity kind: {0}")]
pub struct ParseEntityKindError(pub String);

impl FromStr for EntityKind {
    type Err = ParseEntityKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arc" => Ok(Self::Arc),
            "character" => Ok(Self::Character),
            "location" => Ok(Self::Location),
            "item" => Ok(Self::Item),
            other => Err(ParseEntityKindError(other.to_string())),
        }
    }
}
