//! spanview-engine: Headless core for the spanview trace viewer
//!
//! This crate provides everything that doesn't touch a terminal:
//! - Scene graph model (timelines, detail panels, entries)
//! - Trace document loading from JSON
//! - The range-select gesture state machine and controller

pub mod scene;
pub mod select;
pub mod trace;

// Re-export commonly used types
pub use scene::{Entry, Panel, Scene, Slider, Timeline};
pub use select::{domain_window, track_fraction, Effect, Gesture, Phase, RangeSelect, Span, MOTION_LIMIT};
pub use trace::{EntrySpec, PanelSpec, TimelineSpec, TraceDocument, TraceError};
