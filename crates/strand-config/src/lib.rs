//! Layered configuration for Strand.
//!
//! Configuration is merged once at startup from three tiers: built-in
//! defaults, a global user-level override, and a per-project override; the
//! same key wins last. The result is an immutable [`SyncConfig`] passed by
//! value into the engine. There is no runtime global lookup.
//!
//! Invalid values never abort anything: each bad key falls back to the
//! built-in default for that key only and is surfaced as a
//! [`ConfigWarning`].

pub mod layer;

pub use layer::{ConfigLayer, ConfigWarning};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The effective configuration of a reconciliation pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Reference instant for partially-specified dates, and the date given
    /// to new events carrying no date/time information.
    pub default_date_time: NaiveDateTime,
    /// Name of the distinguished arc marking authored-story events.
    pub narrative_arc_name: String,
    /// Name of the description property slot on the timeline side.
    pub description_property_name: String,
    /// Name of the notes property slot on the timeline side.
    pub notes_property_name: String,
    /// Role name binding characters to events.
    pub character_role_name: String,
    /// Role name binding locations to events.
    pub location_role_name: String,
    /// Role name binding items to events.
    pub item_role_name: String,
    /// Entity type name for characters on the timeline side.
    pub character_type_name: String,
    /// Entity type name for locations on the timeline side.
    pub location_type_name: String,
    /// Entity type name for items on the timeline side.
    pub item_type_name: String,
    /// Color given to new events mirroring narrative sections.
    pub section_event_color: String,
    /// Color given to new events mirroring Notes material.
    pub other_event_color: String,
    /// When `true`, only records belonging to the narrative are
    /// synchronized: Notes-type sections create no events and non-arc
    /// events create no sections.
    pub create_notes_records_only: bool,
    /// When `true`, every synchronized event gets a recomputed moon-phase
    /// annotation.
    pub sync_moon_phase: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            default_date_time: builtin_default_date_time(),
            narrative_arc_name: "Narrative".to_string(),
            description_property_name: "Description".to_string(),
            notes_property_name: "Notes".to_string(),
            character_role_name: "Participant".to_string(),
            location_role_name: "Location".to_string(),
            item_role_name: "Item".to_string(),
            character_type_name: "Character".to_string(),
            location_type_name: "Location".to_string(),
            item_type_name: "Item".to_string(),
            section_event_color: "Red".to_string(),
            other_event_color: "Yellow".to_string(),
            create_notes_records_only: false,
            sync_moon_phase: false,
        }
    }
}

impl SyncConfig {
    /// Merge the three tiers into an effective configuration.
    ///
    /// Defaults < global < project; the last layer to set a key wins.
    pub fn effective(global: Option<&ConfigLayer>, project: Option<&ConfigLayer>) -> Self {
        let mut config = Self::default();
        if let Some(layer) = global {
            config.apply(layer);
        }
        if let Some(layer) = project {
            config.apply(layer);
        }
        config
    }

    /// Overlay one layer onto this configuration.
    pub fn apply(&mut self, layer: &ConfigLayer) {
        macro_rules! overlay {
            ($config:expr, $layer:expr, $($field:ident),+ $(,)?) => {
                $(if let Some(value) = &$layer.$field {
                    $config.$field = value.clone();
                })+
            };
        }
        overlay!(
            self,
            layer,
            narrative_arc_name,
            description_property_name,
            notes_property_name,
            character_role_name,
            location_role_name,
            item_role_name,
            character_type_name,
            location_type_name,
            item_type_name,
            section_event_color,
            other_event_color,
        );
        if let Some(value) = layer.default_date_time {
            self.default_date_time = value;
        }
        if let Some(value) = layer.create_notes_records_only {
            self.create_notes_records_only = value;
        }
        if let Some(value) = layer.sync_moon_phase {
            self.sync_moon_phase = value;
        }
    }
}

fn builtin_default_date_time() -> NaiveDateTime {
    // 2023-01-01 00:00:00; components are valid by construction.
    NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MIN)
}
