use crate::api::config::GapConfig;
use crate::core::difficulty::fall_interval_for_level;

/// The player's column. Moves only through clamped move commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub column: usize,
}

impl Player {
    pub fn new(column: usize) -> Self {
        Self { column }
    }

    /// Shift by `dx` columns, clamped to `[0, width - 1]`.
    pub fn shift(&mut self, dx: i32, width: usize) {
        let max = width.saturating_sub(1) as i64;
        let target = (self.column as i64 + dx as i64).clamp(0, max);
        self.column = target as usize;
    }
}

/// Per-session counters plus the best score carried across sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub score: u32,
    pub level: u32,
    /// Current milliseconds between ticks.
    pub fall_interval: f32,
    pub best: u32,
}

impl Session {
    pub fn new(config: &GapConfig, best: u32) -> Self {
        Self {
            score: 0,
            level: 1,
            fall_interval: fall_interval_for_level(config, 1),
            best,
        }
    }

    /// Zero the counters for a new session, keeping the best score.
    pub fn reset(&mut self, config: &GapConfig) {
        *self = Self::new(config, self.best);
    }

    /// Fold the current score into the best score. Returns true if it improved.
    pub fn record_best(&mut self) -> bool {
        if self.score > self.best {
            self.best = self.score;
            true
        } else {
            false
        }
    }
}
