use crate::{
    animation::timeline::SnapDirection,
    foundation::error::{ReportError, ReportResult},
    navigation::state::View,
};

/// Keys the report reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Arrow up.
    ArrowUp,
    /// Arrow down.
    ArrowDown,
    /// Arrow left.
    ArrowLeft,
    /// Arrow right.
    ArrowRight,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Space bar.
    Space,
    /// Enter / return.
    Enter,
    /// Escape.
    Escape,
    /// Home.
    Home,
    /// End.
    End,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Option<Self> {
        Some(match key {
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            " " | "Spacebar" => Self::Space,
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            "Home" => Self::Home,
            "End" => Self::End,
            _ => return None,
        })
    }
}

/// Raw input as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    /// Key press.
    Key {
        /// Pressed key.
        key: Key,
        /// Whether shift was held.
        #[serde(default)]
        shift: bool,
    },
    /// Mouse wheel / trackpad delta.
    Wheel {
        /// Vertical delta; positive scrolls down.
        delta_y: f64,
        /// Host timestamp in milliseconds.
        now_ms: u64,
    },
    /// Finger down.
    TouchStart {
        /// Horizontal position in pixels.
        x: f64,
        /// Vertical position in pixels.
        y: f64,
    },
    /// Finger up.
    TouchEnd {
        /// Horizontal position in pixels.
        x: f64,
        /// Vertical position in pixels.
        y: f64,
    },
    /// Native scroll inside the landing's pinned region.
    Scroll {
        /// Offset within the region in pixels.
        offset: f64,
    },
}

/// What an input event asks for.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Continuous scrub of the landing region.
    ScrollTo(f64),
    /// Page the landing timeline to the adjacent snap point.
    Snap(SnapDirection),
    /// Leave the landing for the first card.
    OpenReport,
    /// Router `next`.
    Next,
    /// Router `prev`.
    Prev,
    /// Router `close` (back to landing).
    Close,
    /// Skip to the conclusion.
    Conclusion,
}

/// Gesture thresholds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InputOpts {
    /// Minimum time between two wheel-triggered steps.
    pub wheel_cooldown_ms: u64,
    /// Wheel deltas smaller than this are ignored (trackpad jitter).
    pub wheel_min_delta: f64,
    /// Minimum travel on the dominant axis for a swipe.
    pub swipe_min_px: f64,
}

impl Default for InputOpts {
    fn default() -> Self {
        Self {
            wheel_cooldown_ms: 800,
            wheel_min_delta: 30.0,
            swipe_min_px: 50.0,
        }
    }
}

impl InputOpts {
    /// Check thresholds are finite and non-negative.
    pub fn validate(&self) -> ReportResult<()> {
        if !self.wheel_min_delta.is_finite() || self.wheel_min_delta < 0.0 {
            return Err(ReportError::validation("wheel_min_delta must be finite and >= 0"));
        }
        if !self.swipe_min_px.is_finite() || self.swipe_min_px < 0.0 {
            return Err(ReportError::validation("swipe_min_px must be finite and >= 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Translates raw input into [`Command`]s depending on the active view.
///
/// Holds only gesture bookkeeping (wheel cooldown, touch origin); it never touches router or
/// progress state itself.
#[derive(Clone, Debug, Default)]
pub struct InputDispatcher {
    opts: InputOpts,
    last_wheel_ms: Option<u64>,
    touch_origin: Option<(f64, f64)>,
}

impl InputDispatcher {
    /// Create a dispatcher with the given thresholds.
    pub fn new(opts: InputOpts) -> ReportResult<Self> {
        opts.validate()?;
        Ok(Self {
            opts,
            last_wheel_ms: None,
            touch_origin: None,
        })
    }

    /// Forget gesture state (view change, listener teardown).
    pub fn reset(&mut self) {
        self.last_wheel_ms = None;
        self.touch_origin = None;
    }

    /// Translate one event.
    pub fn dispatch(&mut self, view: View, event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::Key { key, shift } => Self::key(view, key, shift),
            InputEvent::Wheel { delta_y, now_ms } => {
                let step = self.wheel(delta_y, now_ms)?;
                Some(Self::step(view, step))
            }
            InputEvent::TouchStart { x, y } => {
                self.touch_origin = Some((x, y));
                None
            }
            InputEvent::TouchEnd { x, y } => {
                let (axis, step) = self.swipe(x, y)?;
                if view == View::Landing && axis == Axis::Horizontal {
                    return None;
                }
                Some(Self::step(view, step))
            }
            InputEvent::Scroll { offset } => {
                (view == View::Landing).then_some(Command::ScrollTo(offset))
            }
        }
    }

    fn key(view: View, key: Key, shift: bool) -> Option<Command> {
        let step = match key {
            Key::Space if shift => Step::Backward,
            Key::Space | Key::PageDown | Key::ArrowDown => Step::Forward,
            Key::PageUp | Key::ArrowUp => Step::Backward,
            Key::ArrowRight if view != View::Landing => Step::Forward,
            Key::ArrowLeft if view != View::Landing => Step::Backward,
            Key::Enter if view == View::Landing => return Some(Command::OpenReport),
            Key::Escape | Key::Home if view != View::Landing => return Some(Command::Close),
            Key::End if view != View::Landing => return Some(Command::Conclusion),
            _ => return None,
        };
        Some(Self::step(view, step))
    }

    fn step(view: View, step: Step) -> Command {
        match (view, step) {
            (View::Landing, Step::Forward) => Command::Snap(SnapDirection::Forward),
            (View::Landing, Step::Backward) => Command::Snap(SnapDirection::Backward),
            (_, Step::Forward) => Command::Next,
            (_, Step::Backward) => Command::Prev,
        }
    }

    fn wheel(&mut self, delta_y: f64, now_ms: u64) -> Option<Step> {
        if !delta_y.is_finite() || delta_y.abs() < self.opts.wheel_min_delta {
            return None;
        }
        if let Some(last) = self.last_wheel_ms
            && now_ms.saturating_sub(last) < self.opts.wheel_cooldown_ms
        {
            return None;
        }
        self.last_wheel_ms = Some(now_ms);
        Some(if delta_y > 0.0 {
            Step::Forward
        } else {
            Step::Backward
        })
    }

    fn swipe(&mut self, x: f64, y: f64) -> Option<(Axis, Step)> {
        let (x0, y0) = self.touch_origin.take()?;
        let (dx, dy) = (x - x0, y - y0);
        let (axis, travel) = if dx.abs() > dy.abs() {
            (Axis::Horizontal, dx)
        } else {
            (Axis::Vertical, dy)
        };
        if !travel.is_finite() || travel.abs() < self.opts.swipe_min_px {
            return None;
        }
        // Finger moving up or left pulls the next content in.
        let step = if travel < 0.0 {
            Step::Forward
        } else {
            Step::Backward
        };
        Some((axis, step))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/dispatch.rs"]
mod tests;
