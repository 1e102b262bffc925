//! JSON file stores.
//!
//! Serde-backed file persistence for both models. These are the backends the
//! CLI driver uses; the applications' native container formats are adapted
//! behind the same traits elsewhere.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ModelResult;
use crate::narrative::NarrativeModel;
use crate::timeline::TimelineModel;
use crate::traits::{NarrativeStore, TimelineStore};

/// A [`TimelineStore`] reading and writing a JSON file.
#[derive(Clone, Debug)]
pub struct JsonTimelineStore {
    path: PathBuf,
}

impl JsonTimelineStore {
    /// Create a store bound to `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// The file this store is bound to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TimelineStore for JsonTimelineStore {
    fn load(&self) -> ModelResult<TimelineModel> {
        let reader = BufReader::new(File::open(&self.path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    fn save(&self, model: &TimelineModel) -> ModelResult<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, model)?;
        writer.flush()?;
        Ok(())
    }
}

/// A [`NarrativeStore`] reading and writing a JSON file.
#[derive(Clone, Debug)]
pub struct JsonNarrativeStore {
    path: PathBuf,
}

impl JsonNarrativeStore {
    /// Create a store bound to `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// The file this store is bound to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NarrativeStore for JsonNarrativeStore {
    fn load(&self) -> ModelResult<NarrativeModel> {
        let reader = BufReader::new(File::open(&self.path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    fn save(&self, model: &NarrativeModel) -> ModelResult<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, model)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use crate::section::{Chapter, Section};
    use strand_calendar::{PartialOffset, StoryInstant};
    use strand_types::SectionKind;

    #[test]
    fn timeline_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonTimelineStore::new(dir.path().join("timeline.json"));

        let mut model = TimelineModel::new();
        model
            .events
            .push(Event::new("Storm", StoryInstant::Offset(PartialOffset::days(2))));
        model.ensure_standard_properties("Description", "Notes");

        store.save(&model).unwrap();
        assert_eq!(store.load().unwrap(), model);
    }

    #[test]
    fn narrative_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonNarrativeStore::new(dir.path().join("narrative.json"));

        let mut model = NarrativeModel::new();
        let mut chapter = Chapter::new("Act I");
        chapter.sections.push(Section::new("Arrival", SectionKind::Normal));
        model.chapters.push(chapter);

        store.save(&model).unwrap();
        assert_eq!(store.load().unwrap(), model);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let store = JsonTimelineStore::new("/nonexistent/timeline.json");
        assert!(matches!(store.load(), Err(crate::ModelError::Io(_))));
    }
}
