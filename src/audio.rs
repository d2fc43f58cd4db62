//! Sound cues using the Web Audio API
//!
//! Procedurally generated - no audio files. The spin core only reports tick
//! crossings and completion; whether anything is audible is decided here
//! from the user's settings.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

/// Audio manager for the picker
pub struct AudioManager {
    ctx: Option<AudioContext>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // May fail outside a secure context; the wheel works silently then
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - sound disabled");
        }
        Self { ctx }
    }

    /// Resume the audio context (required after a user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Pointer tick - short dry click, volume supplied by the spin core
    /// (already scaled by remaining wheel speed and the master volume)
    pub fn play_tick(&self, volume: f32) {
        if volume <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let Some((osc, gain)) = self.create_osc(ctx, 1100.0, OscillatorType::Square) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(volume, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.001, t + 0.04)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.05).ok();
    }

    /// Completion fanfare - three ascending notes
    pub fn play_fanfare(&self, volume: f32) {
        if volume <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let t = ctx.current_time();
        for (i, freq) in [523.25, 659.25, 783.99].iter().enumerate() {
            let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) else {
                continue;
            };
            let start = t + i as f64 * 0.12;

            gain.gain().set_value_at_time(volume * 0.8, start).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.001, start + 0.4)
                .ok();

            osc.start_with_when(start).ok();
            osc.stop_with_when(start + 0.45).ok();
        }
    }
}
