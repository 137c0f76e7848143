//! Range selection on a timeline track.
//!
//! This module provides:
//! - [`Gesture`] - The drag interaction state machine (pure transitions)
//! - [`RangeSelect`] - Per-timeline controller applying effects to a scene
//! - [`Span`] - Normalized selection interval with 1/1000 resolution

mod controller;
mod gesture;

pub use controller::{domain_window, RangeSelect};
pub use gesture::{quantize, track_fraction, Effect, Gesture, Phase, Span, MOTION_LIMIT};
