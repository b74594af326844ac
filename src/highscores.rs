//! High score persistence
//!
//! A single best-score value under the `highscore` key. Read once at session
//! start; written on collision when the session best beats the stored value.

/// Storage key (used only in wasm32)
#[allow(dead_code)]
const STORAGE_KEY: &str = "highscore";

/// Backing store for the persisted high score.
///
/// The browser build uses LocalStorage; tests inject an in-memory store to
/// observe both the first-run write and the collision-time persist.
pub trait ScoreStore {
    /// Read the stored score, if one has ever been written
    fn load(&self) -> Option<u64>;
    /// Overwrite the stored score
    fn save(&mut self, score: u64);
}

/// In-memory store for tests and native runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(score: u64) -> Self {
        Self { value: Some(score) }
    }

    pub fn get(&self) -> Option<u64> {
        self.value
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Option<u64> {
        self.value
    }

    fn save(&mut self, score: u64) {
        self.value = Some(score);
    }
}

/// LocalStorage-backed store (WASM only). The value is a plain decimal
/// string; anything unparseable reads as absent.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStore {
    fn load(&self) -> Option<u64> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()?;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        raw.parse().ok()
    }

    fn save(&mut self, score: u64) {
        if let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        {
            let _ = storage.set_item(STORAGE_KEY, &score.to_string());
            log::info!("High score saved ({score})");
        }
    }
}

/// Read the stored high score, writing the 0 default on first run
pub fn load_or_init(store: &mut impl ScoreStore) -> u64 {
    match store.load() {
        Some(score) => {
            log::info!("High score loaded ({score})");
            score
        }
        None => {
            log::info!("No stored high score, starting at 0");
            store.save(0);
            0
        }
    }
}

/// Persist the session best if it beats the stored value
pub fn persist_if_better(store: &mut impl ScoreStore, high_score: u64) {
    let beats_stored = store.load().map(|stored| high_score > stored);
    if beats_stored.unwrap_or(true) {
        store.save(high_score);
    }
}
