//! Relationship synchronization between a record pair.
//!
//! For each role, the named references on the source record are resolved
//! through the destination model's registry (creating missing entities) and
//! the destination record's set for that role is replaced wholesale.
//! Relationship sync is a full replace, not an incremental diff.

use std::collections::BTreeSet;

use strand_model::{EntityRegistry, RoleRefs};
use strand_types::RelationRole;

use crate::report::{SyncAction, SyncReport};

/// Replace the destination's references with the source's, role by role.
///
/// `arc_names` is the already-adjusted arc membership for the destination
/// record (the narrative-arc marker is direction-specific and supplied by
/// the caller). Every referenced entity is resolved via `get_or_create`;
/// creations land in the report. Returns `true` if any role set changed.
pub fn sync_relationships(
    source: &RoleRefs,
    dest: &mut RoleRefs,
    registry: &mut EntityRegistry,
    arc_names: BTreeSet<String>,
    report: &mut SyncReport,
) -> bool {
    let mut changed = false;
    for role in [
        RelationRole::Participant,
        RelationRole::Location,
        RelationRole::Item,
    ] {
        let names = source.get(role).clone();
        resolve_all(registry, role, &names, report);
        changed |= dest.replace(role, names);
    }
    resolve_all(registry, RelationRole::ArcMembership, &arc_names, report);
    changed |= dest.replace(RelationRole::ArcMembership, arc_names);
    changed
}

fn resolve_all(
    registry: &mut EntityRegistry,
    role: RelationRole,
    names: &BTreeSet<String>,
    report: &mut SyncReport,
) {
    let kind = role.entity_kind();
    for name in names {
        let (_, created) = registry.get_or_create(kind, name);
        if created {
            report.record(SyncAction::CreateEntity, name.clone(), kind.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strand_types::EntityKind;

    fn names(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn full_replace_per_role() {
        let mut source = RoleRefs::new();
        source.participants = names(&["Alice", "Bob"]);
        source.locations = names(&["Harbor"]);

        let mut dest = RoleRefs::new();
        dest.participants = names(&["Carol"]);
        dest.items = names(&["Lantern"]);

        let mut registry = EntityRegistry::new();
        let mut report = SyncReport::new();
        let changed = sync_relationships(
            &source,
            &mut dest,
            &mut registry,
            BTreeSet::new(),
            &mut report,
        );

        assert!(changed);
        assert_eq!(dest.participants, names(&["Alice", "Bob"]));
        assert_eq!(dest.locations, names(&["Harbor"]));
        // The stale item reference is replaced by the (empty) source set.
        assert!(dest.items.is_empty());
    }

    #[test]
    fn missing_entities_are_created_and_reported() {
        let mut source = RoleRefs::new();
        source.participants = names(&["Alice"]);

        let mut registry = EntityRegistry::new();
        registry.characters.get_or_create("Alice");

        let mut dest = RoleRefs::new();
        let mut report = SyncReport::new();
        source.locations = names(&["Harbor"]);
        sync_relationships(&source, &mut dest, &mut registry, names(&["Subplot"]), &mut report);

        // Alice already existed; Harbor and Subplot were created.
        assert_eq!(report.count(SyncAction::CreateEntity), 2);
        assert!(registry.find_by_name(EntityKind::Location, "Harbor").is_some());
        assert!(registry.find_by_name(EntityKind::Arc, "Subplot").is_some());
        assert_eq!(dest.arcs, names(&["Subplot"]));
    }

    #[test]
    fn identical_sets_change_nothing() {
        let mut source = RoleRefs::new();
        source.participants = names(&["Alice"]);
        let mut dest = RoleRefs::new();
        dest.participants = names(&["Alice"]);

        let mut registry = EntityRegistry::new();
        registry.characters.get_or_create("Alice");
        let mut report = SyncReport::new();

        let changed = sync_relationships(
            &source,
            &mut dest,
            &mut registry,
            BTreeSet::new(),
            &mut report,
        );
        assert!(!changed);
        assert!(!report.has_changes());
    }
}
