//! Wheel state and spin session types
//!
//! One wheel instance owns the cumulative rotation and at most one active
//! spin session. The rotation is a single unbounded degree accumulator -
//! never wrapped, written only by the frame tick, monotonically
//! non-decreasing while a spin is in flight.

use std::fmt;

use super::layout::WheelLayout;
use super::rng::{PcgSource, RandomSource};
use super::select::{pick_winners, sanitize};
use super::target::{TargetingError, compute_target};

/// Animation phase of the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    /// Wheel at rest, ready to spin
    Idle,
    /// Animation in flight; spin requests are dropped
    Spinning,
}

/// Transient record of one animation, created at spin start and consumed at
/// completion. Holds the layout snapshot so entry-list edits cannot touch an
/// in-flight spin.
#[derive(Debug, Clone)]
pub struct SpinSession {
    pub start_rotation: f64,
    pub target_rotation: f64,
    /// Wall-clock start, seconds (caller's clock)
    pub start_time: f64,
    /// Rotation at which the last tick cue fired
    pub last_tick_rotation: f64,
    /// Slice arrangement captured at spin start
    pub layout: WheelLayout,
    /// Full winners list, revealed to the caller only at completion
    pub winners: Vec<String>,
}

/// Events surfaced by the frame tick
#[derive(Debug, Clone, PartialEq)]
pub enum SpinEvent {
    /// The wheel crossed one slice boundary; volume scales with remaining
    /// speed. Best-effort, not part of the correctness contract.
    Tick { volume: f32 },
    /// The animation finished; fired exactly once per spin. Winners are in
    /// selection rank order and safe to display now.
    Completed { winners: Vec<String> },
}

/// Outcome of a spin request
#[derive(Debug, Clone, PartialEq)]
pub enum SpinStart {
    /// A new spin began. Winners are already decided (hold them until the
    /// completion event before displaying).
    Started { winners: Vec<String> },
    /// A spin was already in flight; the request was dropped.
    Ignored,
}

/// Fatal spin-request failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinError {
    /// No candidates remain after sanitization
    EmptyCandidates,
    /// The rank-1 winner vanished from the candidate list before targeting
    Targeting(TargetingError),
}

impl fmt::Display for SpinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinError::EmptyCandidates => write!(f, "no candidates to spin for"),
            SpinError::Targeting(e) => write!(f, "targeting failed: {e}"),
        }
    }
}

impl std::error::Error for SpinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpinError::Targeting(e) => Some(e),
            SpinError::EmptyCandidates => None,
        }
    }
}

impl From<TargetingError> for SpinError {
    fn from(e: TargetingError) -> Self {
        SpinError::Targeting(e)
    }
}

/// The wheel: cumulative rotation plus the active spin session, if any
pub struct WheelState {
    pub rotation: f64,
    pub phase: SpinPhase,
    pub session: Option<SpinSession>,
    rng: Box<dyn RandomSource>,
}

impl WheelState {
    /// Create a wheel with a PCG stream seeded from `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Box::new(PcgSource::seed_from_u64(seed)))
    }

    /// Create a wheel with an injected random source (tests)
    pub fn with_rng(rng: Box<dyn RandomSource>) -> Self {
        Self {
            rotation: 0.0,
            phase: SpinPhase::Idle,
            session: None,
            rng,
        }
    }

    /// Layout of the in-flight spin, if one is active. Renderers should
    /// prefer this over a layout rebuilt from live entries so mid-spin
    /// edits don't repaint the wheel under the animation.
    pub fn active_layout(&self) -> Option<&WheelLayout> {
        self.session.as_ref().map(|s| &s.layout)
    }

    /// Start a spin over `entries` at wall-clock time `now` (seconds).
    ///
    /// Selection runs here, synchronously, before any animation: the full
    /// winners list is fixed and returned immediately, independent of the
    /// wheel visual. Requests while already spinning are dropped.
    pub fn start_spin(
        &mut self,
        entries: &[String],
        winner_count: usize,
        now: f64,
    ) -> Result<SpinStart, SpinError> {
        if self.phase == SpinPhase::Spinning {
            log::debug!("spin request dropped: already spinning");
            return Ok(SpinStart::Ignored);
        }

        let candidates = sanitize(entries);
        if candidates.is_empty() {
            return Err(SpinError::EmptyCandidates);
        }

        let winners = pick_winners(&candidates, winner_count.max(1), self.rng.as_mut());
        let layout = WheelLayout::new(candidates);
        let target = compute_target(&layout, &winners[0], self.rotation, self.rng.as_mut())?;

        log::info!(
            "spin started: {} candidates, {} winner(s), {:.0} degrees to travel",
            layout.len(),
            winners.len(),
            target - self.rotation
        );

        self.session = Some(SpinSession {
            start_rotation: self.rotation,
            target_rotation: target,
            start_time: now,
            last_tick_rotation: self.rotation,
            layout,
            winners: winners.clone(),
        });
        self.phase = SpinPhase::Spinning;

        Ok(SpinStart::Started { winners })
    }
}
