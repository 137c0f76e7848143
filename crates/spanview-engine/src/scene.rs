//! Scene graph for a loaded trace.
//!
//! This is the in-memory structure the range-select controller operates on:
//! it reads timeline and entry attributes, and writes visibility flags and
//! slider geometry back. The surrounding application owns the scene; the
//! controller only ever mutates the flags and the slider.

/// A loaded trace: timelines plus the detail panels they reference.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    timelines: Vec<Timeline>,
    panels: Vec<Panel>,
}

impl Scene {
    /// Create a scene from already-built parts.
    pub fn new(timelines: Vec<Timeline>, panels: Vec<Panel>) -> Self {
        Self { timelines, panels }
    }

    /// All timelines, in document order.
    pub fn timelines(&self) -> &[Timeline] {
        &self.timelines
    }

    pub fn timeline(&self, index: usize) -> Option<&Timeline> {
        self.timelines.get(index)
    }

    pub fn timeline_mut(&mut self, index: usize) -> Option<&mut Timeline> {
        self.timelines.get_mut(index)
    }

    /// All panels, in document order.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    pub fn panel_mut(&mut self, index: usize) -> Option<&mut Panel> {
        self.panels.get_mut(index)
    }

    /// Resolve a panel identifier to its index.
    pub fn panel_index(&self, id: &str) -> Option<usize> {
        self.panels.iter().position(|p| p.id == id)
    }
}

/// A single timeline: an integer timestamp domain plus a link to its
/// details panel.
#[derive(Debug, Clone)]
pub struct Timeline {
    /// Display name (e.g. lock type and thread).
    pub name: String,
    /// Start of the timestamp domain.
    pub start: u64,
    /// End of the timestamp domain.
    pub end: u64,
    /// Identifier of the details panel this timeline toggles.
    pub details: String,
    /// Selection highlight over the track. At most one exists at a time;
    /// it is created and destroyed exclusively by the controller.
    pub slider: Option<Slider>,
}

impl Timeline {
    pub fn new(
        name: impl Into<String>,
        start: u64,
        end: u64,
        details: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            details: details.into(),
            slider: None,
        }
    }

    /// Length of the timestamp domain.
    pub fn duration(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }
}

/// Geometry of the selection highlight, in percent of the track width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Slider {
    pub left_pct: f64,
    pub width_pct: f64,
}

/// A details panel: a container of entries with a visibility flag.
#[derive(Debug, Clone)]
pub struct Panel {
    /// Identifier timelines link against.
    pub id: String,
    /// Whether the panel is currently shown. Panels start hidden.
    pub visible: bool,
    /// Entries in document order.
    pub entries: Vec<Entry>,
}

impl Panel {
    pub fn new(id: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            id: id.into(),
            visible: false,
            entries,
        }
    }

    /// Clear the hidden flag on every entry.
    pub fn reset_entries(&mut self) {
        for entry in &mut self.entries {
            entry.hidden = false;
        }
    }

    /// Entries currently visible (not filtered out).
    pub fn visible_entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| !e.hidden)
    }
}

/// A single event row inside a details panel.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Display label (e.g. "read", "write").
    pub label: String,
    /// Timestamp the event opened.
    pub start: u64,
    /// Timestamp the event closed.
    pub close: u64,
    /// Whether the entry is filtered out by the current selection.
    pub hidden: bool,
}

impl Entry {
    pub fn new(label: impl Into<String>, start: u64, close: u64) -> Self {
        Self {
            label: label.into(),
            start,
            close,
            hidden: false,
        }
    }
}
