pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod persistence;

// Re-export key types at crate root for convenience
pub use crate::api::config::GapConfig;
pub use crate::api::game::GapGame;
pub use crate::api::session::{Player, Session};
pub use crate::api::types::{Direction, GameEvent, Phase, StepOutcome};
pub use crate::core::board::Board;
pub use crate::core::difficulty::{fall_interval_for_level, gaps_for_level};
pub use crate::core::game_loop::{FrameReport, GameLoop};
pub use crate::core::rng::Rng;
pub use crate::core::row::{generate_row, Row};
pub use crate::core::time::TickAccumulator;
pub use crate::systems::step::{gaps_for_width, step, step_with_row};
pub use crate::renderer::{BoardView, NullRenderer, Renderer};
pub use crate::bridge::protocol::{FrameBuffer, FrameLayout};
pub use crate::input::queue::{InputEvent, InputQueue};
pub use crate::persistence::{load_best_or_default, JsonFileStore, MemoryStore, ScoreStore, StoreError};
