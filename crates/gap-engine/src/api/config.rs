use serde::{Deserialize, Serialize};

/// Narrowest board the engine accepts.
pub const MIN_COLS: usize = 4;
/// Widest board the engine accepts (also the frame protocol's column capacity).
pub const MAX_COLS: usize = 16;
/// Shortest visible stack; the judgment row needs two rows below the newest.
pub const MIN_ROWS: usize = 4;
/// Tallest visible stack (also the frame protocol's row capacity).
pub const MAX_ROWS: usize = 32;
/// Fastest fall interval any setting may reach, in milliseconds.
pub const MIN_FALL_INTERVAL_MS: u32 = 16;

/// Tunable game configuration. Every field may be changed at runtime; values
/// are clamped into range by [`GapConfig::sanitized`] instead of rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GapConfig {
    /// Board width in cells.
    pub cols: usize,
    /// Number of rows on screen (board capacity).
    pub rows_visible: usize,
    /// Gaps per row at level 1.
    pub start_gaps: usize,
    /// Gap count floor.
    pub min_gaps: usize,
    /// Fall interval at level 1, in milliseconds.
    pub start_delay_ms: u32,
    /// Fall interval floor, in milliseconds.
    pub min_delay_ms: u32,
    /// Interval reduction per level, in milliseconds.
    pub level_speed_step_ms: u32,
    /// Score points per level.
    pub level_every: u32,
    /// Largest elapsed time a single render callback may contribute.
    pub max_frame_delta_ms: f32,
    /// Columns moved by a fast move.
    pub fast_move: usize,
    /// Player start column. `None` centres the player.
    pub start_column: Option<usize>,
    /// Open the player's cell in the first judged row at session start.
    pub force_start_gap: bool,
    /// RNG seed for row generation.
    pub seed: u64,
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            cols: 10,
            rows_visible: 16,
            start_gaps: 5,
            min_gaps: 1,
            start_delay_ms: 520,
            min_delay_ms: 120,
            level_speed_step_ms: 40,
            level_every: 10,
            max_frame_delta_ms: 50.0,
            fast_move: 3,
            start_column: None,
            force_start_gap: true,
            seed: 0x9E37_79B9_7F4A_7C15,
        }
    }
}

impl GapConfig {
    /// Parse a config from JSON. Missing fields take their defaults; the
    /// result is sanitized before it is returned.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: GapConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Clamp every field into its valid range.
    pub fn sanitized(mut self) -> Self {
        let before = self.clone();

        self.cols = self.cols.clamp(MIN_COLS, MAX_COLS);
        self.rows_visible = self.rows_visible.clamp(MIN_ROWS, MAX_ROWS);
        self.min_gaps = self.min_gaps.clamp(1, self.cols - 1);
        self.start_gaps = self.start_gaps.clamp(self.min_gaps, self.cols - 1);
        self.min_delay_ms = self.min_delay_ms.max(MIN_FALL_INTERVAL_MS);
        self.start_delay_ms = self.start_delay_ms.max(self.min_delay_ms);
        self.level_every = self.level_every.max(1);
        if !self.max_frame_delta_ms.is_finite() || self.max_frame_delta_ms < 1.0 {
            self.max_frame_delta_ms = 1.0;
        }
        self.fast_move = self.fast_move.max(1);
        self.start_column = self.start_column.map(|c| c.min(self.cols - 1));

        if self != before {
            log::warn!("config clamped: {:?} -> {:?}", before, self);
        }
        self
    }

    /// The column a fresh session puts the player in.
    pub fn start_column(&self) -> usize {
        self.start_column.unwrap_or(self.cols / 2).min(self.cols - 1)
    }

    /// Board index of the judgment row, counted from the newest row.
    pub fn judgment_row(&self) -> usize {
        self.rows_visible - 2
    }
}
