//! Range-select controller.
//!
//! Binds one timeline to its details panel and turns gesture effects into
//! scene mutations: slider lifecycle, the normalized-span to domain-time
//! mapping, entry filtering, and panel visibility.

use tracing::debug;

use crate::scene::{Scene, Slider};

use super::gesture::{Effect, Gesture, Span};

/// One controller per timeline that resolved a details panel at bind time.
#[derive(Debug)]
pub struct RangeSelect {
    timeline: usize,
    panel: usize,
    gesture: Gesture,
}

impl RangeSelect {
    /// Bind a controller to every timeline in the scene whose details panel
    /// resolves. Timelines with a dangling panel reference are skipped and
    /// stay inert.
    pub fn bind(scene: &Scene) -> Vec<Self> {
        let mut controllers = Vec::new();
        for (index, timeline) in scene.timelines().iter().enumerate() {
            let Some(panel) = scene.panel_index(&timeline.details) else {
                debug!(
                    timeline = %timeline.name,
                    details = %timeline.details,
                    "skipping timeline without a details panel"
                );
                continue;
            };
            controllers.push(Self {
                timeline: index,
                panel,
                gesture: Gesture::new(),
            });
        }
        controllers
    }

    /// Index of the bound timeline in the scene.
    pub fn timeline(&self) -> usize {
        self.timeline
    }

    /// Whether this controller's gesture is in progress.
    pub fn is_tracking(&self) -> bool {
        self.gesture.is_tracking()
    }

    /// Pointer pressed on this timeline's track.
    pub fn pointer_down(&mut self, scene: &mut Scene, primary: bool) {
        let stale = scene
            .timeline(self.timeline)
            .is_some_and(|t| t.slider.is_some());
        let effects = self.gesture.pointer_down(primary, stale);
        self.apply(scene, &effects);
    }

    /// Pointer moved; `fraction` is relative to this timeline's track.
    pub fn pointer_move(&mut self, scene: &mut Scene, fraction: f64) {
        let effects = self.gesture.pointer_move(fraction);
        self.apply(scene, &effects);
    }

    /// Pointer released anywhere. No-op unless this controller is tracking.
    pub fn pointer_up(&mut self, scene: &mut Scene) {
        let effects = self.gesture.pointer_up();
        self.apply(scene, &effects);
    }

    fn apply(&self, scene: &mut Scene, effects: &[Effect]) {
        for effect in effects {
            match *effect {
                Effect::RemoveSlider => {
                    if let Some(timeline) = scene.timeline_mut(self.timeline) {
                        timeline.slider = None;
                    }
                }
                Effect::CreateSlider => {
                    if let Some(timeline) = scene.timeline_mut(self.timeline) {
                        timeline.slider = Some(Slider::default());
                    }
                }
                Effect::UpdateSlider {
                    left_pct,
                    width_pct,
                } => {
                    if let Some(timeline) = scene.timeline_mut(self.timeline) {
                        timeline.slider = Some(Slider {
                            left_pct,
                            width_pct,
                        });
                    }
                }
                Effect::Commit { span } => self.commit(scene, span),
                Effect::ResetEntries => {
                    if let Some(panel) = scene.panel_mut(self.panel) {
                        panel.reset_entries();
                    }
                }
                Effect::TogglePanel => {
                    if let Some(panel) = scene.panel_mut(self.panel) {
                        panel.visible = !panel.visible;
                    }
                }
            }
        }
    }

    /// Map the normalized span into the timeline's domain and recompute
    /// every entry's hidden flag. The panel is always forced visible after
    /// a real selection, never toggled.
    fn commit(&self, scene: &mut Scene, span: Span) {
        let Some(timeline) = scene.timeline(self.timeline) else {
            return;
        };
        let (from, to) = domain_window(timeline.start, timeline.end, span);

        debug!(
            timeline = %timeline.name,
            from,
            to,
            "committing selection window"
        );

        if let Some(panel) = scene.panel_mut(self.panel) {
            for entry in &mut panel.entries {
                // Containment test with inclusive boundaries: an entry must
                // start at/after `from` and close at/before `to` to stay
                // visible.
                entry.hidden = (entry.start as f64) < from || (entry.close as f64) > to;
            }
            panel.visible = true;
        }
    }
}

/// Map a normalized span onto a `[start, end]` timestamp domain.
pub fn domain_window(start: u64, end: u64, span: Span) -> (f64, f64) {
    let start = start as f64;
    let duration = end as f64 - start;
    (start + duration * span.from, start + duration * span.to)
}
