//! Timeline track widget.
//!
//! Renders one timeline as a name row plus a one-row track bar. Entries of
//! the linked panel are drawn as segments at their percentage offset and
//! width within the domain; the selection slider is highlighted on top.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use spanview_engine::{Panel, Timeline};
use std::time::Duration;

use crate::theme::Theme;

/// Timeline track widget.
pub struct TrackWidget<'a> {
    timeline: &'a Timeline,
    panel: Option<&'a Panel>,
    theme: &'a Theme,
}

impl<'a> TrackWidget<'a> {
    /// Create a new track widget. `panel` is the timeline's details panel,
    /// if it resolved; its entries are drawn as segments on the bar.
    pub fn new(timeline: &'a Timeline, panel: Option<&'a Panel>, theme: &'a Theme) -> Self {
        Self {
            timeline,
            panel,
            theme,
        }
    }
}

impl Widget for TrackWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        // Name row: timeline name left, domain duration right.
        let duration = Duration::from_nanos(self.timeline.duration());
        let label = format!("{duration:?}");
        let name_width = (area.width as usize).saturating_sub(label.len() + 1);
        let title = Line::from(vec![
            Span::styled(
                format!("{:<name_width$}", self.timeline.name),
                Style::default().fg(self.theme.text),
            ),
            Span::styled(format!(" {label}"), Style::default().fg(self.theme.muted)),
        ]);
        buf.set_line(area.x, area.y, &title, area.width);

        if area.height < 2 {
            return;
        }

        // Track bar.
        let bar = Rect::new(area.x, area.y + 1, area.width, 1);
        buf.set_style(bar, Style::default().bg(self.theme.track));

        let domain = self.timeline.duration();
        if let (Some(panel), true) = (self.panel, domain > 0) {
            for entry in &panel.entries {
                let left_pct =
                    (entry.start.saturating_sub(self.timeline.start)) as f64 / domain as f64
                        * 100.0;
                let width_pct =
                    (entry.close.saturating_sub(entry.start)) as f64 / domain as f64 * 100.0;
                let (dx, len) = pct_cells(bar.width, left_pct, width_pct);
                let segment = Rect::new(bar.x + dx, bar.y, len, 1);
                buf.set_style(
                    segment.intersection(bar),
                    Style::default().bg(self.theme.segment),
                );
            }
        }

        // Selection highlight.
        if let Some(slider) = self.timeline.slider {
            let (dx, len) = pct_cells(bar.width, slider.left_pct, slider.width_pct);
            let highlight = Rect::new(bar.x + dx, bar.y, len, 1);
            buf.set_style(
                highlight.intersection(bar),
                Style::default()
                    .bg(self.theme.slider)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }
}

/// Convert a left/width pair in percent of the track into a cell offset and
/// length. A present-but-narrow range still occupies one cell.
fn pct_cells(track_width: u16, left_pct: f64, width_pct: f64) -> (u16, u16) {
    let width = f64::from(track_width);
    let left = (left_pct / 100.0 * width).round().clamp(0.0, width) as u16;
    let len = (width_pct / 100.0 * width).round() as u16;
    let len = len.max(1).min(track_width.saturating_sub(left));
    (left, len)
}
