use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::EntityKind;

/// Role of an entity reference on an event or section.
///
/// Relationships are not first-class persisted objects; each model keeps a
/// name set per role and the engine recomputes associations from those sets
/// every pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationRole {
    /// A character taking part in the event/section.
    Participant,
    /// Where the event/section takes place.
    Location,
    /// An item present in the event/section.
    Item,
    /// Membership in a story arc.
    ArcMembership,
}

impl RelationRole {
    /// All roles, in a fixed order suitable for deterministic iteration.
    pub const ALL: [RelationRole; 4] = [
        RelationRole::Participant,
        RelationRole::Location,
        RelationRole::Item,
        RelationRole::ArcMembership,
    ];

    /// The entity kind a reference in this role resolves to.
    pub fn entity_kind(&self) -> EntityKind {
        match self {
            Self::Participant => EntityKind::Character,
            Self::Location => EntityKind::Location,
            Self::Item => EntityKind::Item,
            Self::ArcMembership => EntityKind::Arc,
        }
    }
}

impl fmt::Display for RelationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Participant => write!(f, "participant"),
            Self::Location => write!(f, "location"),
            Self::Item => write!(f, "item"),
            Self::ArcMembership => write!(f, "arc membership"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_role_maps_to_one_kind() {
        assert_eq!(RelationRole::Participant.entity_kind(), EntityKind::Character);
        assert_eq!(RelationRole::Location.entity_kind(), EntityKind::Location);
        assert_eq!(RelationRole::Item.entity_kind(), EntityKind::Item);
        assert_eq!(RelationRole::ArcMembership.entity_kind(), EntityKind::Arc);
    }
}
