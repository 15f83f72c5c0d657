pub mod board;
pub mod difficulty;
pub mod game_loop;
pub mod rng;
pub mod row;
pub mod time;
