//! wasm-bindgen exports for the falling-rows game.
//!
//! The host calls `game_init` once, then `game_tick` from every
//! `requestAnimationFrame` callback and reads the frame buffer through
//! `get_frame_ptr`.

pub mod runner;
pub mod storage;

pub use runner::GameRunner;
pub use storage::LocalStorageStore;

use std::cell::RefCell;

use gap_engine::{GapConfig, InputEvent};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<GameRunner<LocalStorageStore>>> = RefCell::new(None);
}

/// Run `f` against the live runner. Calls made before `game_init` are dropped.
fn with_runner<R>(f: impl FnOnce(&mut GameRunner<LocalStorageStore>) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("game not initialized, call game_init() first");
                None
            }
        }
    })
}

fn parse_config(config_json: Option<String>) -> GapConfig {
    match config_json {
        Some(json) => GapConfig::from_json(&json).unwrap_or_else(|err| {
            log::warn!("ignoring bad config: {}", err);
            GapConfig::default()
        }),
        None => GapConfig::default(),
    }
}

#[wasm_bindgen]
pub fn game_init(config_json: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = parse_config(config_json);
    let runner = GameRunner::new(config, LocalStorageStore::default());
    let best = runner.game().best();
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("gap: initialized (best {})", best);
}

#[wasm_bindgen]
pub fn game_tick(now_ms: f64) {
    with_runner(|r| {
        r.tick(now_ms);
    });
}

// ---- Input ----

#[wasm_bindgen]
pub fn game_move(dx: i32) {
    with_runner(|r| r.push_input(InputEvent::Move { dx }));
}

#[wasm_bindgen]
pub fn game_swipe(dx_px: f32) {
    with_runner(|r| r.push_input(InputEvent::Swipe { dx_px }));
}

#[wasm_bindgen]
pub fn game_start() {
    with_runner(|r| r.push_input(InputEvent::Start));
}

#[wasm_bindgen]
pub fn game_toggle_pause() {
    with_runner(|r| r.push_input(InputEvent::TogglePause));
}

#[wasm_bindgen]
pub fn game_start_or_toggle_pause() {
    with_runner(|r| r.push_input(InputEvent::StartOrTogglePause));
}

/// Pause immediately, e.g. when the page is hidden.
#[wasm_bindgen]
pub fn game_pause() {
    with_runner(|r| r.pause());
}

#[wasm_bindgen]
pub fn game_resume() {
    with_runner(|r| r.resume());
}

#[wasm_bindgen]
pub fn game_clear_best() {
    with_runner(|r| r.push_input(InputEvent::ClearBest));
}

// ---- Remix ----

#[wasm_bindgen]
pub fn game_configure(config_json: String) {
    let config = parse_config(Some(config_json));
    with_runner(|r| r.configure(config));
}

#[wasm_bindgen]
pub fn set_speed(interval_ms: u32) {
    with_runner(|r| r.set_speed(interval_ms));
}

#[wasm_bindgen]
pub fn set_cols(cols: u32) {
    with_runner(|r| r.set_cols(cols as usize));
}

#[wasm_bindgen]
pub fn set_gaps(gaps: u32) {
    with_runner(|r| r.set_gaps(gaps as usize));
}

// ---- Frame buffer ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_frame_total_floats() -> u32 {
    with_runner(|r| r.frame_total_floats()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_cell_data_offset() -> u32 {
    with_runner(|r| r.cell_data_offset()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_event_data_offset() -> u32 {
    with_runner(|r| r.event_data_offset()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_score() -> u32 {
    with_runner(|r| r.game().score()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_best() -> u32 {
    with_runner(|r| r.game().best()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_level() -> u32 {
    with_runner(|r| r.game().level()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn is_running() -> bool {
    with_runner(|r| r.game().is_running()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn is_paused() -> bool {
    with_runner(|r| r.game().is_paused()).unwrap_or(false)
}
