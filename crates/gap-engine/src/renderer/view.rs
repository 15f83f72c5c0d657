use crate::api::types::{GameEvent, Phase};
use crate::core::board::Board;

/// Read-only snapshot of everything a renderer or HUD needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    /// Rows, newest (top of the screen) first.
    pub board: &'a Board,
    pub cols: usize,
    pub rows_visible: usize,
    /// Screen row of the player, counted from the top.
    pub judgment_row: usize,
    pub player_column: usize,
    pub score: u32,
    pub level: u32,
    pub best: u32,
    pub phase: Phase,
    /// Milliseconds between ticks.
    pub fall_interval: f32,
    /// Progress toward the next tick (0.0 to 1.0), for smoothing row motion.
    pub tick_alpha: f32,
    /// Events emitted this frame.
    pub events: &'a [GameEvent],
}

impl BoardView<'_> {
    pub fn running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn paused(&self) -> bool {
        self.phase.is_paused()
    }

    /// Cell at screen position (`row` from the top, `col`).
    /// `None` when no row occupies that screen row yet.
    ///
    /// A board that is not yet full is drawn bottom-aligned, so its newest
    /// row sits `capacity - len` rows below the top edge.
    pub fn cell(&self, row: usize, col: usize) -> Option<bool> {
        let offset = self.rows_visible.checked_sub(self.board.len())?;
        let index = row.checked_sub(offset)?;
        let r = self.board.get(index)?;
        (col < r.width()).then(|| r.is_blocking(col))
    }
}
