// Best-score persistence. The engine talks to a `ScoreStore`; hosts pick the
// backing medium (memory, a JSON file, browser storage in gap-web).

pub mod file;
pub mod store;

pub use file::JsonFileStore;
pub use store::{load_best_or_default, MemoryStore, ScoreStore, StoreError};
