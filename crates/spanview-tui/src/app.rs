//! Application state and update logic for the spanview TUI.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use spanview_engine::{track_fraction, RangeSelect, Scene};

use crate::event::Action;
use crate::theme::Theme;

/// Maximum rows a details panel occupies before its entry list is cut off.
const MAX_PANEL_HEIGHT: u16 = 10;

/// Rows of one timeline block: name row plus track bar.
const TRACK_HEIGHT: u16 = 2;

/// Computed placement of one timeline block for the current frame. Used
/// both for rendering and for mouse hit-testing.
#[derive(Debug, Clone, Copy)]
pub struct WidgetLayout {
    /// Index of the timeline in the scene.
    pub timeline: usize,
    /// Name row plus track bar.
    pub block: Rect,
    /// The track bar row itself (hit target for gestures).
    pub track: Rect,
    /// Details panel area, present only while the panel is visible.
    pub panel: Option<Rect>,
}

/// Top-level application state.
pub struct App {
    scene: Scene,
    controllers: Vec<RangeSelect>,
    layouts: Vec<WidgetLayout>,
    /// Index of the first timeline shown (vertical scrolling).
    scroll: usize,
    pub theme: Theme,
    pub should_quit: bool,
}

impl App {
    /// Create the application for a loaded scene, binding one controller
    /// per timeline that resolves a details panel.
    pub fn new(scene: Scene) -> Self {
        let controllers = RangeSelect::bind(&scene);
        Self {
            scene,
            controllers,
            layouts: Vec::new(),
            scroll: 0,
            theme: Theme::default(),
            should_quit: false,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Layouts computed by the last [`App::layout`] call.
    pub fn layouts(&self) -> &[WidgetLayout] {
        &self.layouts
    }

    /// Handle a keyboard action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::ScrollDown => {
                if self.scroll + 1 < self.scene.timelines().len() {
                    self.scroll += 1;
                }
            }
            Action::None => {}
        }
    }

    /// Recompute timeline block placement for this frame, starting from the
    /// scroll offset and stopping when the area is full.
    pub fn layout(&mut self, area: Rect) {
        self.layouts.clear();
        let mut y = area.y;

        for (index, timeline) in self.scene.timelines().iter().enumerate().skip(self.scroll) {
            if y + TRACK_HEIGHT > area.y + area.height {
                break;
            }

            let block = Rect::new(area.x, y, area.width, TRACK_HEIGHT);
            let track = Rect::new(area.x, y + 1, area.width, 1);
            y += TRACK_HEIGHT;

            let panel = self
                .scene
                .panel_index(&timeline.details)
                .map(|i| &self.scene.panels()[i])
                .filter(|panel| panel.visible)
                .map(|panel| {
                    // Borders plus one row per surviving entry (at least the
                    // placeholder row), capped.
                    let rows = panel.visible_entries().count().max(1) as u16 + 2;
                    let height = rows
                        .min(MAX_PANEL_HEIGHT)
                        .min((area.y + area.height).saturating_sub(y));
                    let rect = Rect::new(area.x, y, area.width, height);
                    y += height;
                    rect
                })
                .filter(|rect| rect.height > 0);

            self.layouts.push(WidgetLayout {
                timeline: index,
                block,
                track,
                panel,
            });

            // Separator row between blocks.
            y += 1;
        }
    }

    /// Handle a mouse event against the last computed layout.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(button) => {
                if let Some(timeline) = self.track_at(position) {
                    let scene = &mut self.scene;
                    if let Some(controller) = self
                        .controllers
                        .iter_mut()
                        .find(|c| c.timeline() == timeline)
                    {
                        controller.pointer_down(scene, button == MouseButton::Left);
                    }
                }
            }
            MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                // Motion is delivered to whichever controller is tracking,
                // relative to its own track, even off the track.
                let scene = &mut self.scene;
                let layouts = &self.layouts;
                for controller in self.controllers.iter_mut().filter(|c| c.is_tracking()) {
                    let Some(track) = layouts
                        .iter()
                        .find(|l| l.timeline == controller.timeline())
                        .map(|l| l.track)
                    else {
                        continue;
                    };
                    let fraction = track_fraction(
                        f64::from(mouse.column),
                        f64::from(track.x),
                        f64::from(track.width),
                    );
                    controller.pointer_move(scene, fraction);
                }
            }
            MouseEventKind::Up(_) => {
                // Pointer-up is global: every controller sees it, idle ones
                // ignore it.
                let scene = &mut self.scene;
                for controller in &mut self.controllers {
                    controller.pointer_up(scene);
                }
            }
            MouseEventKind::ScrollUp => self.handle_action(Action::ScrollUp),
            MouseEventKind::ScrollDown => self.handle_action(Action::ScrollDown),
            _ => {}
        }
    }

    /// Find the timeline whose track bar contains the position.
    fn track_at(&self, position: Position) -> Option<usize> {
        self.layouts
            .iter()
            .find(|l| l.track.contains(position))
            .map(|l| l.timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use spanview_engine::{Entry, Panel, Timeline};

    fn test_app() -> App {
        let scene = Scene::new(
            vec![
                Timeline::new("one", 1000, 2000, "p1"),
                Timeline::new("two", 0, 100, "p2"),
            ],
            vec![
                Panel::new(
                    "p1",
                    vec![Entry::new("a", 1100, 1200), Entry::new("b", 1900, 2050)],
                ),
                Panel::new("p2", vec![Entry::new("c", 10, 20)]),
            ],
        );
        let mut app = App::new(scene);
        app.layout(Rect::new(0, 0, 100, 30));
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_layout_places_tracks() {
        let app = test_app();
        assert_eq!(app.layouts().len(), 2);
        // Name row at y=0, track bar at y=1; next block after a separator.
        assert_eq!(app.layouts()[0].track, Rect::new(0, 1, 100, 1));
        assert_eq!(app.layouts()[1].track, Rect::new(0, 4, 100, 1));
        assert!(app.layouts()[0].panel.is_none());
    }

    #[test]
    fn test_click_toggles_panel_and_layout_reserves_space() {
        let mut app = test_app();

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 50, 1));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 50, 1));
        assert!(app.scene().panel(0).unwrap().visible);

        app.layout(Rect::new(0, 0, 100, 30));
        assert!(app.layouts()[0].panel.is_some());
    }

    #[test]
    fn test_drag_on_track_filters_panel() {
        let mut app = test_app();

        // Track is 100 cells wide: drag from x=0 to x=50 selects [0, 0.5],
        // i.e. the domain window [1000, 1500].
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 1));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 0, 1));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 50, 1));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 50, 1));

        let panel = app.scene().panel(0).unwrap();
        assert!(panel.visible);
        assert!(!panel.entries[0].hidden);
        assert!(panel.entries[1].hidden);

        // The other timeline is untouched.
        assert!(!app.scene().panel(1).unwrap().visible);
        assert!(app.scene().timeline(0).unwrap().slider.is_some());
    }

    #[test]
    fn test_motion_off_track_keeps_tracking() {
        let mut app = test_app();

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 20, 1));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 20, 1));
        // Pointer leaves the track row entirely; the gesture continues and
        // the fraction still comes from the horizontal position.
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 80, 15));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 80, 15));

        assert!(app.scene().panel(0).unwrap().visible);
        let slider = app.scene().timeline(0).unwrap().slider.unwrap();
        assert!((slider.left_pct - 20.0).abs() < 1e-9);
        assert!((slider.width_pct - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_down_outside_any_track_is_ignored() {
        let mut app = test_app();

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 50, 0));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 50, 0));

        assert!(!app.scene().panel(0).unwrap().visible);
        assert!(!app.scene().panel(1).unwrap().visible);
    }

    #[test]
    fn test_non_primary_button_ignored() {
        let mut app = test_app();

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 50, 1));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Right), 50, 1));

        assert!(!app.scene().panel(0).unwrap().visible);
    }

    #[test]
    fn test_scroll_clamps() {
        let mut app = test_app();
        app.handle_action(Action::ScrollUp);
        assert_eq!(app.scroll, 0);

        app.handle_action(Action::ScrollDown);
        assert_eq!(app.scroll, 1);
        app.handle_action(Action::ScrollDown);
        assert_eq!(app.scroll, 1);

        app.layout(Rect::new(0, 0, 100, 30));
        assert_eq!(app.layouts().len(), 1);
        assert_eq!(app.layouts()[0].timeline, 1);
    }

    #[test]
    fn test_quit_action() {
        let mut app = test_app();
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }
}
