//! Frame-by-frame spin animation
//!
//! Called once per animation frame with the caller's wall-clock time. The
//! trajectory is time-based (not velocity-integrated), so the wheel always
//! terminates exactly on the precomputed target regardless of frame pacing.

use crate::consts::{SPIN_DURATION_SECS, TICK_VOLUME_MAX, TICK_VOLUME_MIN};

use super::state::{SpinEvent, SpinPhase, WheelState};

/// Cubic ease-out: fast at launch, decelerating smoothly to zero
#[inline]
fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Advance the wheel to wall-clock time `now` (seconds).
///
/// Emits one `Tick` per slice-width crossed since the last cue and, on the
/// frame where progress reaches 1, pins the rotation to the exact target
/// and emits a single `Completed`. No-op while idle.
pub fn tick(state: &mut WheelState, now: f64) -> Vec<SpinEvent> {
    let mut events = Vec::new();

    if state.phase != SpinPhase::Spinning {
        return events;
    }
    let Some(session) = state.session.as_mut() else {
        return events;
    };

    let elapsed = (now - session.start_time).max(0.0);
    let progress = (elapsed / SPIN_DURATION_SECS).min(1.0);
    let eased = ease_out_cubic(progress);

    // Host clocks are not guaranteed monotonic; a backwards step must not
    // rewind the wheel mid-spin
    let rotation =
        session.start_rotation + (session.target_rotation - session.start_rotation) * eased;
    state.rotation = rotation.max(state.rotation);

    // One cue per slice boundary crossed since the last one. A slow frame
    // may cross several boundaries; each still gets exactly one cue.
    let slice_width = session.layout.slice_width();
    if progress < 1.0 {
        while state.rotation - session.last_tick_rotation >= slice_width {
            session.last_tick_rotation += slice_width;
            let volume = TICK_VOLUME_MIN
                + (TICK_VOLUME_MAX - TICK_VOLUME_MIN) * (1.0 - progress) as f32;
            events.push(SpinEvent::Tick {
                volume: volume.clamp(TICK_VOLUME_MIN, TICK_VOLUME_MAX),
            });
        }
    }

    if progress >= 1.0 {
        // Pin to the exact target so the resting slice matches the winner
        // bit-for-bit, then consume the session: a stray extra frame finds
        // the wheel idle and cannot fire a second completion.
        state.rotation = session.target_rotation;
        let session = state.session.take().expect("session checked above");
        state.phase = SpinPhase::Idle;
        log::info!(
            "spin complete: {:?} at rest under the pointer",
            session.layout.label_at_pointer(state.rotation)
        );
        events.push(SpinEvent::Completed {
            winners: session.winners,
        });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SPIN_DURATION_SECS, TICK_VOLUME_MAX, TICK_VOLUME_MIN};
    use crate::spin::state::{SpinStart, WheelState};

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    /// Drive a full spin at 60 fps, returning every event in order
    fn run_spin(wheel: &mut WheelState) -> Vec<SpinEvent> {
        let mut events = Vec::new();
        let mut now = 0.0;
        while now < SPIN_DURATION_SECS + 0.2 {
            now += 1.0 / 60.0;
            events.extend(tick(wheel, now));
        }
        events
    }

    #[test]
    fn test_idle_tick_is_a_noop() {
        let mut wheel = WheelState::new(1);
        assert!(tick(&mut wheel, 1.0).is_empty());
        assert_eq!(wheel.rotation, 0.0);
    }

    #[test]
    fn test_rotation_monotonic_and_lands_on_winner() {
        let mut wheel = WheelState::new(21);
        let SpinStart::Started { winners } = wheel
            .start_spin(&names(&["A", "B", "C", "D"]), 2, 0.0)
            .unwrap()
        else {
            panic!("expected a started spin");
        };
        let layout = wheel.active_layout().unwrap().clone();
        let target = wheel.session.as_ref().unwrap().target_rotation;

        let mut last = wheel.rotation;
        let mut completions = 0;
        let mut now = 0.0;
        while now < SPIN_DURATION_SECS + 0.2 {
            now += 1.0 / 60.0;
            for event in tick(&mut wheel, now) {
                if let SpinEvent::Completed { winners: done } = event {
                    completions += 1;
                    assert_eq!(done, winners);
                }
            }
            assert!(wheel.rotation >= last, "rotation went backward");
            last = wheel.rotation;
        }

        assert_eq!(completions, 1);
        assert_eq!(wheel.rotation, target);
        assert_eq!(layout.label_at_pointer(wheel.rotation), winners[0]);
        assert!(wheel.session.is_none());
    }

    #[test]
    fn test_completion_fires_exactly_once_despite_extra_frames() {
        let mut wheel = WheelState::new(3);
        wheel.start_spin(&names(&["A", "B"]), 1, 0.0).unwrap();
        let mut completions = 0;
        // Pile on frames far past the duration
        for i in 0..400 {
            let now = i as f64 * (1.0 / 60.0);
            for event in tick(&mut wheel, now) {
                if matches!(event, SpinEvent::Completed { .. }) {
                    completions += 1;
                }
            }
        }
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_tick_cues_one_per_slice_crossing() {
        let mut wheel = WheelState::new(5);
        wheel
            .start_spin(&names(&["A", "B", "C", "D", "E", "F"]), 1, 0.0)
            .unwrap();
        let session = wheel.session.as_ref().unwrap();
        let travel = session.target_rotation - session.start_rotation;
        let slice_width = session.layout.slice_width();

        let events = run_spin(&mut wheel);
        let cues = events
            .iter()
            .filter(|e| matches!(e, SpinEvent::Tick { .. }))
            .count();

        // Total cues bounded by total boundary crossings; the final partial
        // slice and the completion frame emit none
        let crossings = (travel / slice_width).floor() as usize;
        assert!(cues <= crossings);
        assert!(cues >= crossings - 1, "cues {cues} vs crossings {crossings}");
    }

    #[test]
    fn test_tick_volumes_decay_within_range() {
        let mut wheel = WheelState::new(17);
        wheel
            .start_spin(&names(&["A", "B", "C", "D", "E", "F", "G", "H"]), 1, 0.0)
            .unwrap();
        let events = run_spin(&mut wheel);

        let volumes: Vec<f32> = events
            .iter()
            .filter_map(|e| match e {
                SpinEvent::Tick { volume } => Some(*volume),
                _ => None,
            })
            .collect();
        assert!(!volumes.is_empty());
        for v in &volumes {
            assert!((TICK_VOLUME_MIN..=TICK_VOLUME_MAX).contains(v));
        }
        // Early cues are louder than late ones
        assert!(volumes.first().unwrap() > volumes.last().unwrap());
    }

    #[test]
    fn test_solo_entry_still_animates_full_turns() {
        let mut wheel = WheelState::new(4);
        let SpinStart::Started { winners } =
            wheel.start_spin(&names(&["Solo"]), 5, 0.0).unwrap()
        else {
            panic!("expected a started spin");
        };
        assert_eq!(winners, names(&["Solo"]));

        let start = wheel.rotation;
        let events = run_spin(&mut wheel);
        assert!(wheel.rotation - start >= f64::from(crate::consts::MIN_FULL_SPINS) * 360.0);
        assert!(events
            .iter()
            .any(|e| matches!(e, SpinEvent::Completed { .. })));
    }

    #[test]
    fn test_backward_clock_step_never_rewinds() {
        let mut wheel = WheelState::new(11);
        wheel
            .start_spin(&names(&["A", "B", "C", "D"]), 1, 0.0)
            .unwrap();
        tick(&mut wheel, 1.0);
        let before = wheel.rotation;

        // A clock adjustment steps the frame time backwards mid-spin
        tick(&mut wheel, 0.6);
        assert_eq!(wheel.rotation, before);

        // Once time recovers the spin still lands exactly on the target
        let target = wheel.session.as_ref().unwrap().target_rotation;
        let events = run_spin(&mut wheel);
        assert_eq!(wheel.rotation, target);
        assert!(events
            .iter()
            .any(|e| matches!(e, SpinEvent::Completed { .. })));
    }

    #[test]
    fn test_back_to_back_spins_accumulate_rotation() {
        let mut wheel = WheelState::new(8);
        wheel.start_spin(&names(&["A", "B", "C"]), 1, 0.0).unwrap();
        run_spin(&mut wheel);
        let after_first = wheel.rotation;

        // Second spin starts from the accumulated angle, never rewinds
        wheel
            .start_spin(&names(&["A", "B", "C"]), 1, 100.0)
            .unwrap();
        let session = wheel.session.as_ref().unwrap();
        assert_eq!(session.start_rotation, after_first);
        assert!(session.target_rotation > after_first);
    }
}
