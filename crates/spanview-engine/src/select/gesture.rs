//! Drag gesture state machine.
//!
//! One `Gesture` tracks a single pointer interaction on a track:
//! down, zero or more moves, up. Transitions return [`Effect`]s describing
//! the scene mutations to perform, which keeps the fraction math pure and
//! testable independent of any rendering or event wiring.

/// Minimum normalized displacement that distinguishes a drag from a click.
///
/// The same constant gates slider creation during motion and the
/// click-vs-drag decision at release; the visual and semantic behavior
/// must agree.
pub const MOTION_LIMIT: f64 = 0.001;

/// Convert a pointer position to a fraction of the track, `0.0` at the
/// track's left edge and `1.0` at its right. The result is intentionally
/// not clamped; clamping happens when a span is formed.
pub fn track_fraction(pointer_x: f64, track_left: f64, track_width: f64) -> f64 {
    if track_width <= 0.0 {
        return 0.0;
    }
    (pointer_x - track_left) / track_width
}

/// Clamp a fraction to `[0, 1]` and round it to the 1/1000 resolution the
/// selection operates at, so repeated motion updates don't jitter.
pub fn quantize(fraction: f64) -> f64 {
    (fraction.clamp(0.0, 1.0) * 1000.0).round() / 1000.0
}

/// A normalized selection interval with `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span {
    pub from: f64,
    pub to: f64,
}

impl Span {
    /// Build a span from two unordered, unclamped fractions.
    pub fn between(a: f64, b: f64) -> Self {
        Self {
            from: quantize(a.min(b)),
            to: quantize(a.max(b)),
        }
    }

    /// Width of the interval.
    pub fn width(&self) -> f64 {
        self.to - self.from
    }

    /// Whether the interval is wide enough to count as a real drag.
    pub fn is_drag(&self) -> bool {
        (self.to - self.from).abs() > MOTION_LIMIT
    }
}

/// Where the machine is between pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Pointer is down; motion is being tracked.
    Tracking,
}

/// Scene mutation requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Remove the slider visual from the track.
    RemoveSlider,
    /// Create the slider visual (motion passed the threshold).
    CreateSlider,
    /// Reposition the slider visual, in percent of the track width.
    UpdateSlider { left_pct: f64, width_pct: f64 },
    /// A real drag ended: filter entries to this span and show the panel.
    Commit { span: Span },
    /// Clear the hidden flag on every entry.
    ResetEntries,
    /// Flip the panel's visibility.
    TogglePanel,
}

/// Per-interaction gesture state.
#[derive(Debug, Default)]
pub struct Gesture {
    phase: Phase,
    /// Fraction where the drag began. Set lazily on the first motion event
    /// rather than at pointer-down, which tolerates down and first move
    /// landing at slightly different coordinates.
    origin: Option<f64>,
    span: Span,
    /// Whether the slider visual has been created since the current
    /// pointer-down.
    slider_created: bool,
}

impl Gesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a motion subscription is active.
    pub fn is_tracking(&self) -> bool {
        self.phase == Phase::Tracking
    }

    /// Current span. Only meaningful while tracking.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Pointer pressed on the track.
    ///
    /// Non-primary presses are ignored. `stale_slider` reports whether a
    /// slider visual is still present from a previous gesture; it is
    /// removed before tracking starts.
    pub fn pointer_down(&mut self, primary: bool, stale_slider: bool) -> Vec<Effect> {
        if !primary {
            return Vec::new();
        }

        let mut effects = Vec::new();
        if stale_slider {
            effects.push(Effect::RemoveSlider);
        }

        self.phase = Phase::Tracking;
        self.origin = None;
        self.span = Span::default();
        self.slider_created = false;
        effects
    }

    /// Pointer moved while tracking. `fraction` may lie outside `[0, 1]`.
    pub fn pointer_move(&mut self, fraction: f64) -> Vec<Effect> {
        if self.phase != Phase::Tracking {
            return Vec::new();
        }

        let origin = *self.origin.get_or_insert(fraction);

        let mut effects = Vec::new();
        if !self.slider_created && (origin - fraction).abs() > MOTION_LIMIT {
            self.slider_created = true;
            effects.push(Effect::CreateSlider);
        }

        if self.slider_created {
            self.span = Span::between(origin, fraction);
            effects.push(Effect::UpdateSlider {
                left_pct: self.span.from * 100.0,
                width_pct: self.span.width() * 100.0,
            });
        }

        effects
    }

    /// Pointer released. Delivered globally, so this no-ops unless a
    /// gesture is actually in progress.
    pub fn pointer_up(&mut self) -> Vec<Effect> {
        if self.phase != Phase::Tracking {
            return Vec::new();
        }

        let mut effects = Vec::new();
        if self.span.is_drag() {
            effects.push(Effect::Commit { span: self.span });
        } else {
            // A plain click: drop any filter.
            effects.push(Effect::ResetEntries);
            if self.slider_created {
                // The drag collapsed back below the threshold; remove the
                // sliver but leave panel visibility alone.
                effects.push(Effect::RemoveSlider);
            } else {
                effects.push(Effect::TogglePanel);
            }
        }

        self.phase = Phase::Idle;
        self.origin = None;
        self.span = Span::default();
        self.slider_created = false;
        effects
    }
}
