//! One configuration tier, parsed key by key.
//!
//! A layer is an all-optional mirror of [`crate::SyncConfig`]. Parsing is
//! deliberately per-key: a value of the wrong type or an unparseable date
//! falls back to the lower tier for that key only and yields a warning,
//! never an error.

use std::fmt;
use std::path::Path;

use chrono::NaiveDateTime;

/// A single configuration tier with every key optional.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigLayer {
    pub default_date_time: Option<NaiveDateTime>,
    pub narrative_arc_name: Option<String>,
    pub description_property_name: Option<String>,
    pub notes_property_name: Option<String>,
    pub character_role_name: Option<String>,
    pub location_role_name: Option<String>,
    pub item_role_name: Option<String>,
    pub character_type_name: Option<String>,
    pub location_type_name: Option<String>,
    pub item_type_name: Option<String>,
    pub section_event_color: Option<String>,
    pub other_event_color: Option<String>,
    pub create_notes_records_only: Option<bool>,
    pub sync_moon_phase: Option<bool>,
}

/// A non-fatal problem found while reading a configuration tier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The offending key, or the file itself for document-level problems.
    pub key: String,
    pub message: String,
}

impl ConfigWarning {
    fn new(key: &str, message: impl Into<String>) -> Self {
        Self { key: key.to_string(), message: message.into() }
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config key `{}`: {}", self.key, self.message)
    }
}

impl ConfigLayer {
    /// Parse a TOML document into a layer.
    ///
    /// Never fails: an unparseable document yields an empty layer and one
    /// warning; a bad value yields a warning for that key only.
    pub fn from_toml_str(doc: &str) -> (Self, Vec<ConfigWarning>) {
        let mut warnings = Vec::new();
        let table: toml::Table = match doc.parse() {
            Ok(table) => table,
            Err(err) => {
                warnings.push(ConfigWarning::new("<document>", err.to_string()));
                return (Self::default(), warnings);
            }
        };

        let mut layer = Self::default();
        layer.default_date_time = take_string(&table, "default_date_time", &mut warnings)
            .and_then(|raw| match parse_date_time(&raw) {
                Some(dt) => Some(dt),
                None => {
                    warnings.push(ConfigWarning::new(
                        "default_date_time",
                        format!("`{raw}` is not a recognized date/time"),
                    ));
                    None
                }
            });
        layer.narrative_arc_name = take_string(&table, "narrative_arc_name", &mut warnings);
        layer.description_property_name =
            take_string(&table, "description_property_name", &mut warnings);
        layer.notes_property_name = take_string(&table, "notes_property_name", &mut warnings);
        layer.character_role_name = take_string(&table, "character_role_name", &mut warnings);
        layer.location_role_name = take_string(&table, "location_role_name", &mut warnings);
        layer.item_role_name = take_string(&table, "item_role_name", &mut warnings);
        layer.character_type_name = take_string(&table, "character_type_name", &mut warnings);
        layer.location_type_name = take_string(&table, "location_type_name", &mut warnings);
        layer.item_type_name = take_string(&table, "item_type_name", &mut warnings);
        layer.section_event_color = take_string(&table, "section_event_color", &mut warnings);
        layer.other_event_color = take_string(&table, "other_event_color", &mut warnings);
        layer.create_notes_records_only =
            take_bool(&table, "create_notes_records_only", &mut warnings);
        layer.sync_moon_phase = take_bool(&table, "sync_moon_phase", &mut warnings);

        (layer, warnings)
    }

    /// Read a layer from a file.
    ///
    /// A missing file is a normal, empty layer; any other read failure
    /// yields an empty layer and a warning.
    pub fn from_file(path: &Path) -> (Self, Vec<ConfigWarning>) {
        match std::fs::read_to_string(path) {
            Ok(doc) => Self::from_toml_str(&doc),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                (Self::default(), Vec::new())
            }
            Err(err) => {
                let warning =
                    ConfigWarning::new("<document>", format!("{}: {err}", path.display()));
                tracing::warn!(path = %path.display(), error = %err, "config layer unreadable");
                (Self::default(), vec![warning])
            }
        }
    }
}

fn take_string(
    table: &toml::Table,
    key: &str,
    warnings: &mut Vec<ConfigWarning>,
) -> Option<String> {
    match table.get(key) {
        None => None,
        Some(toml::Value::String(s)) => Some(s.clone()),
        Some(other) => {
            warnings.push(ConfigWarning::new(
                key,
                format!("expected a string, got {}", other.type_str()),
            ));
            None
        }
    }
}

fn take_bool(table: &toml::Table, key: &str, warnings: &mut Vec<ConfigWarning>) -> Option<bool> {
    match table.get(key) {
        None => None,
        Some(toml::Value::Boolean(b)) => Some(*b),
        Some(other) => {
            warnings.push(ConfigWarning::new(
                key,
                format!("expected a boolean, got {}", other.type_str()),
            ));
            None
        }
    }
}

fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_document_parses_cleanly() {
        let (layer, warnings) = ConfigLayer::from_toml_str(
            r#"
            default_date_time = "2024-06-01 12:00:00"
            narrative_arc_name = "Story"
            sync_moon_phase = true
            "#,
        );
        assert!(warnings.is_empty());
        assert_eq!(layer.narrative_arc_name.as_deref(), Some("Story"));
        assert_eq!(layer.sync_moon_phase, Some(true));
        assert_eq!(
            layer.default_date_time.map(|dt| dt.to_string()),
            Some("2024-06-01 12:00:00".to_string())
        );
    }

    #[test]
    fn bad_value_falls_back_per_key() {
        let (layer, warnings) = ConfigLayer::from_toml_str(
            r#"
            default_date_time = "next tuesday"
            narrative_arc_name = 7
            section_event_color = "Blue"
            "#,
        );
        assert_eq!(warnings.len(), 2);
        assert!(layer.default_date_time.is_none());
        assert!(layer.narrative_arc_name.is_none());
        assert_eq!(layer.section_event_color.as_deref(), Some("Blue"));
    }

    #[test]
    fn unparseable_document_is_one_warning() {
        let (layer, warnings) = ConfigLayer::from_toml_str("not [ valid toml");
        assert_eq!(layer, ConfigLayer::default());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "<document>");
    }

    #[test]
    fn missing_file_is_an_empty_layer() {
        let dir = tempfile::tempdir().unwrap();
        let (layer, warnings) = ConfigLayer::from_file(&dir.path().join("absent.toml"));
        assert_eq!(layer, ConfigLayer::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn file_layer_reads_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strand.toml");
        std::fs::write(&path, "other_event_color = \"Green\"\n").unwrap();

        let (layer, warnings) = ConfigLayer::from_file(&path);
        assert!(warnings.is_empty());
        assert_eq!(layer.other_event_color.as_deref(), Some("Green"));
    }
}
