// Pointer events -> stroke segments.
// Visual: press on the white canvas, drag, release; each drag step becomes
// one segment for the rasterizer. Moves off the canvas are simply skipped.

use crate::brush::Segment;
use crate::palette::BrushConfig;
use crate::types::{Color, Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// The abstract event stream produced by the window layer (screen coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Press { pos: Point, button: PointerButton },
    Release { pos: Point, button: PointerButton },
    Move { pos: Point },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeState {
    #[default]
    Idle,
    Drawing { last: Point },
}

/// Tracks one press-drag-release cycle over the canvas' on-screen rectangle.
#[derive(Debug, Clone)]
pub struct StrokeInput {
    bounds: Rect,
    state: StrokeState,
}

impl StrokeInput {
    /// `bounds` is where the canvas is displayed, in screen space.
    pub fn new(bounds: Rect) -> Self {
        Self { bounds, state: StrokeState::Idle }
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, StrokeState::Drawing { .. })
    }

    /// Screen -> canvas-local, or None when the point is off the canvas.
    fn to_canvas(&self, pos: Point) -> Option<Point> {
        self.bounds
            .contains(pos)
            .then(|| Point::new(pos.x - self.bounds.x, pos.y - self.bounds.y))
    }

    /// Advance the state machine. Returns the segment to paint, if any.
    /// `brush` is read only when a segment is emitted, so palette changes
    /// mid-stroke affect the following segments only.
    pub fn handle(&mut self, event: InputEvent, brush: BrushConfig, background: Color) -> Option<Segment> {
        match (self.state, event) {
            (StrokeState::Idle, InputEvent::Press { pos, button: PointerButton::Primary }) => {
                if let Some(local) = self.to_canvas(pos) {
                    self.state = StrokeState::Drawing { last: local };
                }
                None
            }
            (StrokeState::Drawing { last }, InputEvent::Move { pos }) => {
                let local = self.to_canvas(pos)?;
                self.state = StrokeState::Drawing { last: local };
                Some(Segment::from_brush(last, local, brush, background))
            }
            (StrokeState::Drawing { .. }, InputEvent::Release { button: PointerButton::Primary, .. }) => {
                self.state = StrokeState::Idle;
                None
            }
            // Idle moves, duplicate presses and other buttons don't touch the stroke.
            _ => None,
        }
    }
}

/// Turns polled pointer samples into discrete events by diffing each frame
/// against the previous one.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    pos: Option<Point>,
    primary: bool,
    secondary: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// `pos` is None when the pointer is outside the window; the last known
    /// position is reused then so a release off-window still ends the stroke.
    pub fn update(&mut self, pos: Option<Point>, primary: bool, secondary: bool) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let prev = self.pos;
        let pos = pos.or(prev);

        if let Some(p) = pos {
            if prev.is_some_and(|q| q != p) {
                events.push(InputEvent::Move { pos: p });
            }
            for (button, now, before) in [
                (PointerButton::Primary, primary, self.primary),
                (PointerButton::Secondary, secondary, self.secondary),
            ] {
                match (before, now) {
                    (false, true) => events.push(InputEvent::Press { pos: p, button }),
                    (true, false) => events.push(InputEvent::Release { pos: p, button }),
                    _ => {}
                }
            }
        }

        self.pos = pos;
        // Without any position we can't report presses; keep the old button
        // state so they are reported once the pointer shows up.
        if pos.is_some() {
            self.primary = primary;
            self.secondary = secondary;
        }
        events
    }
}
