//! Trace document loading.
//!
//! A trace document is the on-disk JSON form of a captured trace: a list of
//! timelines (one per lock instance per thread, typically) and the detail
//! panels they reference by identifier.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::scene::{Entry, Panel, Scene, Timeline};

/// Error type for trace loading.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Trace contains no timelines")]
    Empty,
}

/// On-disk trace document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceDocument {
    #[serde(default)]
    pub timelines: Vec<TimelineSpec>,
    #[serde(default)]
    pub panels: Vec<PanelSpec>,
}

/// One timeline record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineSpec {
    pub name: String,
    /// Start of the timestamp domain (nanoseconds).
    pub start: u64,
    /// End of the timestamp domain (nanoseconds).
    pub end: u64,
    /// Identifier of the details panel this timeline toggles.
    pub details: String,
}

/// One details panel record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelSpec {
    pub id: String,
    #[serde(default)]
    pub entries: Vec<EntrySpec>,
}

/// One entry row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrySpec {
    pub label: String,
    pub start: u64,
    pub close: u64,
}

impl TraceDocument {
    /// Load a trace document from a JSON file.
    ///
    /// A document with no timelines is rejected; there is nothing to view.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let document: Self = serde_json::from_str(&contents)?;

        if document.timelines.is_empty() {
            return Err(TraceError::Empty);
        }

        debug!(
            timelines = document.timelines.len(),
            panels = document.panels.len(),
            "loaded trace document"
        );
        Ok(document)
    }

    /// Build the scene graph the viewer operates on.
    pub fn into_scene(self) -> Scene {
        let timelines = self
            .timelines
            .into_iter()
            .map(|t| Timeline::new(t.name, t.start, t.end, t.details))
            .collect();

        let panels = self
            .panels
            .into_iter()
            .map(|p| {
                let entries = p
                    .entries
                    .into_iter()
                    .map(|e| Entry::new(e.label, e.start, e.close))
                    .collect();
                Panel::new(p.id, entries)
            })
            .collect();

        Scene::new(timelines, panels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "timelines": [
            { "name": "RwLock<Registry> (thread 0)",
              "start": 1000, "end": 2000, "details": "lock-3-0" }
        ],
        "panels": [
            { "id": "lock-3-0",
              "entries": [
                  { "label": "read", "start": 1100, "close": 1200 },
                  { "label": "write", "start": 1900, "close": 2050 }
              ] }
        ]
    }"#;

    fn write_trace(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_and_build_scene() {
        let file = write_trace(SAMPLE);
        let document = TraceDocument::load(file.path()).unwrap();
        let scene = document.into_scene();

        assert_eq!(scene.timelines().len(), 1);
        assert_eq!(scene.timelines()[0].start, 1000);
        assert_eq!(scene.panel_index("lock-3-0"), Some(0));
        assert_eq!(scene.panel(0).unwrap().entries.len(), 2);
        assert_eq!(scene.panel(0).unwrap().entries[1].close, 2050);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TraceDocument::load("/nonexistent/trace.json").unwrap_err();
        assert!(matches!(err, TraceError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let file = write_trace("{ not json");
        let err = TraceDocument::load(file.path()).unwrap_err();
        assert!(matches!(err, TraceError::Json(_)));
    }

    #[test]
    fn test_malformed_bounds_are_rejected() {
        // Non-numeric bounds fail at parse time instead of propagating
        // into the domain mapping.
        let file = write_trace(
            r#"{ "timelines": [ { "name": "t", "start": "oops", "end": 10, "details": "p" } ] }"#,
        );
        let err = TraceDocument::load(file.path()).unwrap_err();
        assert!(matches!(err, TraceError::Json(_)));
    }

    #[test]
    fn test_empty_trace_is_rejected() {
        let file = write_trace(r#"{ "timelines": [], "panels": [] }"#);
        let err = TraceDocument::load(file.path()).unwrap_err();
        assert!(matches!(err, TraceError::Empty));
    }
}
