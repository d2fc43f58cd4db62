//! Spin targeting
//!
//! Computes the rotation the wheel must reach so the winning slice's center
//! rests exactly under the pointer, padded with several full turns so the
//! destination stays unreadable until the wheel slows. Runs once per spin.

use std::fmt;

use crate::consts::{MAX_FULL_SPINS, MIN_FULL_SPINS};
use crate::normalize_deg;

use super::layout::WheelLayout;
use super::rng::RandomSource;

/// The rank-1 winner is missing from the layout's candidate list.
///
/// This means the candidate list was mutated between selection and
/// animation setup - a caller bug. The spin must be aborted rather than
/// landing on a substitute slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetingError {
    pub winner: String,
}

impl fmt::Display for TargetingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "winner {:?} is not on the wheel (candidate list changed after selection)",
            self.winner
        )
    }
}

impl std::error::Error for TargetingError {}

/// Compute the cumulative rotation (degrees) that lands `winner`'s slice
/// center under the pointer after 5-8 extra full turns.
///
/// Always returns a value strictly greater than `current_rotation`.
pub fn compute_target(
    layout: &WheelLayout,
    winner: &str,
    current_rotation: f64,
    rng: &mut dyn RandomSource,
) -> Result<f64, TargetingError> {
    let w = layout.index_of(winner).ok_or_else(|| TargetingError {
        winner: winner.to_string(),
    })?;

    let offset = layout.slice_center_offset(w);
    let final_position = normalize_deg(360.0 - offset);
    let current_mod = normalize_deg(current_rotation);
    // Minimal forward rotation from the current resting angle; may be 0
    // when the wheel already rests on the winner (e.g. a single slice)
    let extra = normalize_deg(final_position - current_mod);

    let span = (MAX_FULL_SPINS - MIN_FULL_SPINS + 1) as usize;
    let spins = MIN_FULL_SPINS + rng.next_index(span) as u32;

    Ok(current_rotation + f64::from(spins) * 360.0 + extra)
}
