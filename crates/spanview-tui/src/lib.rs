//! spanview-tui: Terminal UI for the spanview trace viewer
//!
//! This crate provides the TUI layer for spanview:
//! - Terminal bootstrap with mouse capture and RAII restore
//! - The per-frame layout and mouse dispatch (`App`)
//! - Track and details-panel widgets

mod app;
mod event;
mod theme;
mod widgets;

pub use app::{App, WidgetLayout};
pub use event::{key_to_action, Action, Event, EventHandler};
pub use theme::Theme;
pub use widgets::{PanelWidget, TrackWidget};

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
    Frame, Terminal,
};
use spanview_engine::Scene;
use std::io::{self, stdout};

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI for a loaded scene.
///
/// Sets up the terminal (raw mode, alternate screen, mouse capture), runs
/// the event loop, and restores the terminal on exit.
pub async fn run_tui(scene: Scene) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(scene);

    // Create event handler (4 Hz tick rate = 250ms)
    let mut events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| draw(app, frame))?;

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => app.handle_action(key_to_action(key)),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Tick => {}
                Event::Resize(_, _) => {
                    // Layout is recomputed on the next draw anyway.
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Draw one frame: timeline blocks from the current scroll offset, a footer
/// hint line at the bottom.
fn draw(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    if area.height == 0 {
        return;
    }

    let body = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(1));
    app.layout(body);

    let theme = app.theme.clone();
    let buf = frame.buffer_mut();
    buf.set_style(area, Style::default().bg(theme.base));

    for layout in app.layouts().to_vec() {
        let Some(timeline) = app.scene().timeline(layout.timeline) else {
            continue;
        };
        let panel = app
            .scene()
            .panel_index(&timeline.details)
            .and_then(|i| app.scene().panel(i));

        TrackWidget::new(timeline, panel, &theme).render(layout.block, buf);

        if let (Some(panel_area), Some(panel)) = (layout.panel, panel) {
            let focused = timeline.slider.is_some();
            PanelWidget::new(panel, &theme).focused(focused).render(panel_area, buf);
        }
    }

    let footer = Line::from(Span::styled(
        " drag: select range \u{b7} click: toggle details \u{b7} q: quit",
        Style::default().fg(theme.muted),
    ));
    buf.set_line(area.x, area.y + area.height - 1, &footer, area.width);
}
