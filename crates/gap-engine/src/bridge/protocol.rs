//! Flat frame buffer layout shared with the host renderer.
//! Must stay in sync with the host's reader.
//!
//! Layout (all values f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Cells: max_rows × max_cols floats, row-major, top row first]
//! [Events: max_events × 4 floats]
//! ```
//!
//! Cells hold 1.0 for a blocking cell, 0.0 for a gap and -1.0 where no row
//! occupies the screen row (or the column lies beyond the board width).

use crate::api::config::{MAX_COLS, MAX_ROWS};
use crate::api::types::GameEvent;
use crate::renderer::traits::Renderer;
use crate::renderer::view::BoardView;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_COLS: usize = 2;
pub const HEADER_ROWS_VISIBLE: usize = 3;
pub const HEADER_JUDGMENT_ROW: usize = 4;
pub const HEADER_PLAYER_COLUMN: usize = 5;
pub const HEADER_SCORE: usize = 6;
pub const HEADER_LEVEL: usize = 7;
pub const HEADER_BEST: usize = 8;
pub const HEADER_PHASE: usize = 9;
pub const HEADER_FALL_INTERVAL: usize = 10;
pub const HEADER_TICK_ALPHA: usize = 11;
pub const HEADER_ROW_COUNT: usize = 12;
pub const HEADER_EVENT_COUNT: usize = 13;
pub const HEADER_MAX_EVENTS: usize = 14;
pub const HEADER_MAX_COLS: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

pub const CELL_BLOCK: f32 = 1.0;
pub const CELL_GAP: f32 = 0.0;
pub const CELL_EMPTY: f32 = -1.0;

/// Default number of event slots per frame.
pub const DEFAULT_MAX_EVENTS: usize = 32;

/// Buffer section sizes and offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    pub max_cols: usize,
    pub max_rows: usize,
    pub max_events: usize,

    pub cell_data_offset: usize,
    pub cell_data_floats: usize,
    pub event_data_offset: usize,
    pub event_data_floats: usize,

    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl FrameLayout {
    pub fn new(max_cols: usize, max_rows: usize, max_events: usize) -> Self {
        let cell_data_floats = max_cols * max_rows;
        let event_data_floats = max_events * GameEvent::FLOATS;
        let cell_data_offset = HEADER_FLOATS;
        let event_data_offset = cell_data_offset + cell_data_floats;
        let buffer_total_floats = event_data_offset + event_data_floats;
        Self {
            max_cols,
            max_rows,
            max_events,
            cell_data_offset,
            cell_data_floats,
            event_data_offset,
            event_data_floats,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }
}

impl Default for FrameLayout {
    fn default() -> Self {
        Self::new(MAX_COLS, MAX_ROWS, DEFAULT_MAX_EVENTS)
    }
}

/// Renderer that packs each frame into a flat `f32` buffer for the host.
pub struct FrameBuffer {
    layout: FrameLayout,
    data: Vec<f32>,
    frame_counter: u32,
}

impl FrameBuffer {
    pub fn new(layout: FrameLayout) -> Self {
        let mut data = vec![0.0; layout.buffer_total_floats];
        data[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        data[HEADER_MAX_EVENTS] = layout.max_events as f32;
        data[HEADER_MAX_COLS] = layout.max_cols as f32;
        Self {
            layout,
            data,
            frame_counter: 0,
        }
    }

    pub fn layout(&self) -> &FrameLayout {
        &self.layout
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn header(&self, field: usize) -> f32 {
        self.data[field]
    }

    /// Cell value at screen (`row`, `col`).
    pub fn cell(&self, row: usize, col: usize) -> f32 {
        self.data[self.layout.cell_data_offset + row * self.layout.max_cols + col]
    }

    /// Events packed into the last frame.
    pub fn events(&self) -> &[GameEvent] {
        let count = self.data[HEADER_EVENT_COUNT] as usize;
        let start = self.layout.event_data_offset;
        let floats = &self.data[start..start + count * GameEvent::FLOATS];
        bytemuck::cast_slice(floats)
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new(FrameLayout::default())
    }
}

impl Renderer for FrameBuffer {
    fn draw(&mut self, view: &BoardView<'_>) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
        let h = &mut self.data[..HEADER_FLOATS];
        h[HEADER_FRAME_COUNTER] = self.frame_counter as f32;
        h[HEADER_COLS] = view.cols as f32;
        h[HEADER_ROWS_VISIBLE] = view.rows_visible as f32;
        h[HEADER_JUDGMENT_ROW] = view.judgment_row as f32;
        h[HEADER_PLAYER_COLUMN] = view.player_column as f32;
        h[HEADER_SCORE] = view.score as f32;
        h[HEADER_LEVEL] = view.level as f32;
        h[HEADER_BEST] = view.best as f32;
        h[HEADER_PHASE] = view.phase as u8 as f32;
        h[HEADER_FALL_INTERVAL] = view.fall_interval;
        h[HEADER_TICK_ALPHA] = view.tick_alpha;
        h[HEADER_ROW_COUNT] = view.board.len() as f32;

        let FrameLayout {
            max_cols,
            max_rows,
            cell_data_offset,
            ..
        } = self.layout;
        let cells = &mut self.data[cell_data_offset..cell_data_offset + max_cols * max_rows];
        for row in 0..max_rows {
            for col in 0..max_cols {
                let value = if row < view.rows_visible {
                    match view.cell(row, col) {
                        Some(true) => CELL_BLOCK,
                        Some(false) => CELL_GAP,
                        None => CELL_EMPTY,
                    }
                } else {
                    CELL_EMPTY
                };
                cells[row * max_cols + col] = value;
            }
        }

        let count = view.events.len().min(self.layout.max_events);
        if count < view.events.len() {
            log::warn!(
                "dropping {} game events over the frame limit",
                view.events.len() - count
            );
        }
        let start = self.layout.event_data_offset;
        let floats: &[f32] = bytemuck::cast_slice(&view.events[..count]);
        self.data[start..start + floats.len()].copy_from_slice(floats);
        self.data[HEADER_EVENT_COUNT] = count as f32;
    }
}
