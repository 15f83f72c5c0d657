use bytemuck::{Pod, Zeroable};

/// Result of a single simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    GameOver,
}

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Phase {
    /// No session has been started yet (title screen).
    Idle = 0,
    Running = 1,
    Paused = 2,
    /// The last session ended; waiting for a new start.
    Ended = 3,
}

impl Phase {
    pub fn is_running(self) -> bool {
        matches!(self, Phase::Running | Phase::Paused)
    }

    pub fn is_paused(self) -> bool {
        self == Phase::Paused
    }
}

/// Horizontal move direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// A game event communicated to the host UI (score labels, overlay).
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    /// `a` = level.
    pub const SESSION_STARTED: f32 = 1.0;
    /// `a` = score.
    pub const SCORE: f32 = 2.0;
    /// `a` = new level, `b` = new fall interval (ms).
    pub const LEVEL_UP: f32 = 3.0;
    /// `a` = final score, `b` = best score.
    pub const GAME_OVER: f32 = 4.0;
    pub const PAUSED: f32 = 5.0;
    pub const RESUMED: f32 = 6.0;
    pub const BEST_CLEARED: f32 = 7.0;

    pub fn new(kind: f32, a: f32, b: f32) -> Self {
        Self { kind, a, b, c: 0.0 }
    }
}
