//! Details panel widget.
//!
//! Renders a visible panel's entries as rows: label, open/close timestamps
//! and duration. Entries filtered out by the current selection are skipped.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use spanview_engine::Panel;
use std::time::Duration;

use crate::theme::Theme;

/// Details panel widget.
pub struct PanelWidget<'a> {
    panel: &'a Panel,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> PanelWidget<'a> {
    /// Create a new panel widget.
    pub fn new(panel: &'a Panel, theme: &'a Theme) -> Self {
        Self {
            panel,
            theme,
            focused: false,
        }
    }

    /// Set whether the panel's timeline has an active selection.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for PanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(self.theme.border_focused)
        } else {
            Style::default().fg(self.theme.border)
        };

        let block = Block::default()
            .title(" Details ")
            .title_style(Style::default().fg(self.theme.text))
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let mut y = inner.y;
        let mut shown = 0usize;
        for entry in self.panel.visible_entries() {
            if y >= inner.y + inner.height {
                break;
            }

            let open = format_ns(entry.start);
            let close = format_ns(entry.close);
            let elapsed = format_ns(entry.close.saturating_sub(entry.start));
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<12}", entry.label),
                    Style::default().fg(self.theme.text),
                ),
                Span::styled(open, Style::default().fg(self.theme.subtext)),
                Span::styled(" \u{2014} ", Style::default().fg(self.theme.muted)),
                Span::styled(close, Style::default().fg(self.theme.subtext)),
                Span::styled(
                    format!(" ({elapsed})"),
                    Style::default().fg(self.theme.muted),
                ),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
            y += 1;
            shown += 1;
        }

        if shown == 0 {
            let placeholder = Line::from(Span::styled(
                "No entries in selection",
                Style::default().fg(self.theme.muted),
            ));
            buf.set_line(inner.x, inner.y, &placeholder, inner.width);
        }
    }
}

/// Format a nanosecond timestamp the way the trace records it.
fn format_ns(ns: u64) -> String {
    format!("{:?}", Duration::from_nanos(ns))
}
