use gap_engine::{ScoreStore, StoreError};
use wasm_bindgen::{JsCast, JsValue};

/// `localStorage` key the best score is kept under.
pub const BEST_SCORE_KEY: &str = "gap_best";

/// Best score kept in the browser's `localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(BEST_SCORE_KEY)
    }
}

impl ScoreStore for LocalStorageStore {
    fn load_best(&self) -> Result<Option<u32>, StoreError> {
        match self.storage()?.get_item(&self.key).map_err(js_error)? {
            Some(raw) => parse_best(&raw).map(Some),
            None => Ok(None),
        }
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        self.storage()?
            .set_item(&self.key, &best.to_string())
            .map_err(js_error)
    }

    fn clear_best(&mut self) -> Result<(), StoreError> {
        self.storage()?.remove_item(&self.key).map_err(js_error)
    }
}

/// Parse a stored best score. Anything but a non-negative integer is corrupt.
pub fn parse_best(raw: &str) -> Result<u32, StoreError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|err| StoreError::Corrupt(format!("{:?}: {}", raw, err)))
}

fn js_error(value: JsValue) -> StoreError {
    let message = match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{:?}", value),
    };
    StoreError::Unavailable(message)
}
