//! InstantPick - a prize wheel winner picker
//!
//! Core modules:
//! - `spin`: Deterministic spin core (selection, targeting, time-stepping)
//! - `entries`: Entry-text parsing and duplicate reporting
//! - `settings`: User preferences with LocalStorage persistence
//! - `history`: Winner history (last 50 draws)
//! - `render` / `audio`: Browser-only canvas drawing and sound cues

pub mod entries;
pub mod history;
pub mod settings;
pub mod spin;

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod render;

pub use settings::Settings;
pub use spin::{SpinEvent, SpinStart, WheelState};

use glam::Vec2;

/// Wheel configuration constants
pub mod consts {
    /// Wall-clock duration of one spin animation, in seconds
    pub const SPIN_DURATION_SECS: f64 = 2.5;
    /// Minimum number of full turns per spin
    pub const MIN_FULL_SPINS: u32 = 5;
    /// Maximum number of full turns per spin (inclusive)
    pub const MAX_FULL_SPINS: u32 = 8;

    /// Tick cue volume at the end of the spin (wheel nearly stopped)
    pub const TICK_VOLUME_MIN: f32 = 0.05;
    /// Tick cue volume at the start of the spin (full speed)
    pub const TICK_VOLUME_MAX: f32 = 0.35;

    /// Number of history records kept
    pub const HISTORY_LIMIT: usize = 50;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_deg(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Convert polar (r, theta in radians) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
