/// Horizontal swipe distance (in pixels) that counts as a one-column move.
pub const SWIPE_THRESHOLD_PX: f32 = 24.0;

/// Input events the engine understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Shift the player by `dx` columns.
    Move { dx: i32 },
    /// Start a session when none is running, otherwise toggle pause.
    StartOrTogglePause,
    /// Start a session if none is running.
    Start,
    /// Toggle pause on a running session.
    TogglePause,
    /// A finished horizontal touch swipe of `dx_px` pixels.
    Swipe { dx_px: f32 },
    /// Forget the stored best score.
    ClearBest,
}

impl InputEvent {
    /// Resolve a swipe into a one-column move, or `None` if it was too short.
    pub fn swipe_move(dx_px: f32) -> Option<i32> {
        if dx_px.abs() > SWIPE_THRESHOLD_PX {
            Some(if dx_px > 0.0 { 1 } else { -1 })
        } else {
            None
        }
    }
}

/// A queue of input events.
/// The host writes events into the queue; the game loop drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
