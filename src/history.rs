//! Winner history
//!
//! Persisted to LocalStorage, newest first, capped at the last 50 draws.
//! Records are appended only when a spin's animation completes - never at
//! selection time - so an interrupted spin leaves no trace.

use serde::{Deserialize, Serialize};

use crate::consts::HISTORY_LIMIT;

/// One completed draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Unix timestamp (ms) when the spin completed
    pub timestamp: f64,
    /// Winners in selection rank order
    pub winners: Vec<String>,
}

impl HistoryRecord {
    /// Winners joined for one-line list display
    pub fn summary(&self) -> String {
        self.winners.join(", ")
    }
}

/// Rolling log of completed draws, newest first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WinnerHistory {
    pub records: Vec<HistoryRecord>,
}

impl WinnerHistory {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "instantpick_history";

    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a completed draw; oldest records fall off past the cap
    pub fn record(&mut self, winners: Vec<String>, timestamp: f64) {
        if winners.is_empty() {
            return;
        }
        self.records.insert(0, HistoryRecord { timestamp, winners });
        self.records.truncate(HISTORY_LIMIT);
    }

    /// The most recent draw, if any
    pub fn latest(&self) -> Option<&HistoryRecord> {
        self.records.first()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Load history from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(history) = serde_json::from_str::<WinnerHistory>(&json) {
                    log::info!("Loaded {} history records", history.records.len());
                    return history;
                }
            }
        }

        log::info!("No winner history found, starting fresh");
        Self::new()
    }

    /// Save history to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("History saved ({} records)", self.records.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
