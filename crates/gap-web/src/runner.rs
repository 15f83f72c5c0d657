use gap_engine::{
    FrameBuffer, FrameLayout, FrameReport, GameLoop, GapConfig, GapGame, InputEvent, ScoreStore,
};

/// Wires a [`GameLoop`] to a flat frame buffer the host reads each frame.
///
/// The wasm exports keep one runner in a `thread_local!`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<S: ScoreStore> {
    game_loop: GameLoop<S>,
    frame: FrameBuffer,
}

impl<S: ScoreStore> GameRunner<S> {
    pub fn new(config: GapConfig, store: S) -> Self {
        Self {
            game_loop: GameLoop::new(GapGame::new(config, store)),
            frame: FrameBuffer::new(FrameLayout::default()),
        }
    }

    /// Run one render callback at host time `now_ms` and repack the frame buffer.
    pub fn tick(&mut self, now_ms: f64) -> FrameReport {
        self.game_loop.frame(now_ms, &mut self.frame)
    }

    /// Queue an input event; it applies at the start of the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.game_loop.push_input(event);
    }

    pub fn configure(&mut self, config: GapConfig) {
        self.game_loop.game_mut().set_config(config);
    }

    pub fn set_speed(&mut self, interval_ms: u32) {
        self.game_loop.game_mut().set_speed(interval_ms);
    }

    pub fn set_cols(&mut self, cols: usize) {
        self.game_loop.game_mut().set_cols(cols);
    }

    pub fn set_gaps(&mut self, gaps: usize) {
        self.game_loop.game_mut().set_gaps(gaps);
    }

    pub fn pause(&mut self) {
        self.game_loop.pause();
    }

    pub fn resume(&mut self) {
        self.game_loop.resume();
    }

    pub fn game(&self) -> &GapGame<S> {
        self.game_loop.game()
    }

    // ---- Frame buffer accessors ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn frame_total_floats(&self) -> u32 {
        self.frame.layout().buffer_total_floats as u32
    }

    pub fn cell_data_offset(&self) -> u32 {
        self.frame.layout().cell_data_offset as u32
    }

    pub fn event_data_offset(&self) -> u32 {
        self.frame.layout().event_data_offset as u32
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }
}
