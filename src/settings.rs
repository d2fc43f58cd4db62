//! User settings
//!
//! Persisted separately from winner history in LocalStorage.

use serde::{Deserialize, Serialize};

/// Picker preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// How many winners to draw per spin (>= 1)
    pub winner_count: usize,
    /// Play tick/fanfare sounds
    pub sound_enabled: bool,
    /// Celebrate completion with confetti
    pub confetti_enabled: bool,
    /// Master volume (0.0 - 1.0), scales every cue
    pub master_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            winner_count: 1,
            sound_enabled: true,
            confetti_enabled: true,
            master_volume: 0.8,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "instantpick_settings";

    /// Winner count with the invariant applied (never below 1)
    pub fn effective_winner_count(&self) -> usize {
        self.winner_count.max(1)
    }

    /// Apply a raw winner-count field value. Non-numeric input keeps the
    /// previous count; anything below 1 clamps to 1.
    pub fn apply_winner_count_input(&mut self, raw: &str) {
        if let Ok(n) = raw.trim().parse::<usize>() {
            self.winner_count = n.max(1);
        }
    }

    /// Scale a cue volume by the master volume
    pub fn scaled_volume(&self, volume: f32) -> f32 {
        (volume * self.master_volume).clamp(0.0, 1.0)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
