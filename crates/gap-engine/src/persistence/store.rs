use std::fmt;

/// Why a score store could not be read or written.
#[derive(Debug)]
pub enum StoreError {
    /// The backing medium failed (file system, browser storage).
    Io(std::io::Error),
    /// A stored value exists but does not parse.
    Corrupt(String),
    /// The store is not reachable in this environment.
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "score store io error: {}", err),
            Self::Corrupt(detail) => write!(f, "stored best score is corrupt: {}", detail),
            Self::Unavailable(detail) => write!(f, "score store unavailable: {}", detail),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Corrupt(err.to_string())
    }
}

/// Persistence port for the single best-score integer.
///
/// The engine enforces the running maximum; a store only keeps what it is given.
pub trait ScoreStore {
    /// The stored best score, or `None` if nothing has been saved.
    fn load_best(&self) -> Result<Option<u32>, StoreError>;

    fn save_best(&mut self, best: u32) -> Result<(), StoreError>;

    fn clear_best(&mut self) -> Result<(), StoreError>;
}

/// Load the best score, treating absent or unreadable records as zero.
pub fn load_best_or_default<S: ScoreStore + ?Sized>(store: &S) -> u32 {
    match store.load_best() {
        Ok(best) => best.unwrap_or(0),
        Err(err) => {
            log::warn!("{}; starting from a best score of 0", err);
            0
        }
    }
}

/// Score store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: Option<u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self { best: Some(best) }
    }
}

impl ScoreStore for MemoryStore {
    fn load_best(&self) -> Result<Option<u32>, StoreError> {
        Ok(self.best)
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        self.best = Some(best);
        Ok(())
    }

    fn clear_best(&mut self) -> Result<(), StoreError> {
        self.best = None;
        Ok(())
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn load_best(&self) -> Result<Option<u32>, StoreError> {
        (**self).load_best()
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        (**self).save_best(best)
    }

    fn clear_best(&mut self) -> Result<(), StoreError> {
        (**self).clear_best()
    }
}
