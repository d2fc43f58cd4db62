//! Deterministic spin core
//!
//! Winner selection and wheel animation live here. This module must be pure
//! and deterministic:
//! - Seeded (or injected) RNG only
//! - Wall-clock time passed in by the caller, never read here
//! - No rendering or platform dependencies
//!
//! Selection is authoritative and runs synchronously at spin start; the
//! animation is cosmetic and merely steers the wheel onto the rank-1 winner.

pub mod layout;
pub mod rng;
pub mod select;
pub mod state;
pub mod target;
pub mod tick;

pub use layout::WheelLayout;
pub use rng::{PcgSource, RandomSource, ScriptedSource};
pub use select::pick_winners;
pub use state::{SpinError, SpinEvent, SpinPhase, SpinSession, SpinStart, WheelState};
pub use target::{TargetingError, compute_target};
pub use tick::tick;
