//! Per-role entity name sets attached to a record.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strand_types::RelationRole;

/// The entity references of one event or section, grouped by role.
///
/// References are entity names; order within a role is insignificant, only
/// set membership matters. Relationship sync replaces a whole role set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRefs {
    #[serde(default)]
    pub participants: BTreeSet<String>,
    #[serde(default)]
    pub locations: BTreeSet<String>,
    #[serde(default)]
    pub items: BTreeSet<String>,
    #[serde(default)]
    pub arcs: BTreeSet<String>,
}

impl RoleRefs {
    /// Create an empty reference set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The name set for one role.
    pub fn get(&self, role: RelationRole) -> &BTreeSet<String> {
        match role {
            RelationRole::Participant => &self.participants,
            RelationRole::Location => &self.locations,
            RelationRole::Item => &self.items,
            RelationRole::ArcMembership => &self.arcs,
        }
    }

    /// The mutable name set for one role.
    pub fn get_mut(&mut self, role: RelationRole) -> &mut BTreeSet<String> {
        match role {
            RelationRole::Participant => &mut self.participants,
            RelationRole::Location => &mut self.locations,
            RelationRole::Item => &mut self.items,
            RelationRole::ArcMembership => &mut self.arcs,
        }
    }

    /// Replace the name set for one role wholesale.
    ///
    /// Returns `true` if the set actually changed.
    pub fn replace(&mut self, role: RelationRole, names: BTreeSet<String>) -> bool {
        let slot = self.get_mut(role);
        if *slot == names {
            false
        } else {
            *slot = names;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_reports_change() {
        let mut refs = RoleRefs::new();
        let names: BTreeSet<String> = ["Alice".to_string(), "Bob".to_string()].into();

        assert!(refs.replace(RelationRole::Participant, names.clone()));
        assert!(!refs.replace(RelationRole::Participant, names));
        assert!(refs.replace(RelationRole::Participant, BTreeSet::new()));
    }

    #[test]
    fn roles_are_independent() {
        let mut refs = RoleRefs::new();
        refs.get_mut(RelationRole::Location).insert("Paris".to_string());
        assert!(refs.get(RelationRole::Participant).is_empty());
        assert_eq!(refs.get(RelationRole::Location).len(), 1);
    }
}
