//! Widgets for the spanview TUI.

mod panel;
mod track;

pub use panel::PanelWidget;
pub use track::TrackWidget;
