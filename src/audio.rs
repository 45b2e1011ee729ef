//! Sound cues and the sinks that play them.
//!
//! The simulation only ever *names* a sound; whatever sink the frame loop
//! owns decides how (or whether) to make it audible.  Playing is
//! fire-and-forget and can never fail from the caller's point of view.

use std::io::Write;

use tracing::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Waveform {
    Square,
    Sine,
    Triangle,
    Sawtooth,
}

/// A short synthesized tone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoundCue {
    /// Pitch in Hz.
    pub frequency: f32,
    /// Length in seconds.
    pub duration: f32,
    pub waveform: Waveform,
}

impl SoundCue {
    pub const fn square(frequency: f32, duration: f32) -> Self {
        Self {
            frequency,
            duration,
            waveform: Waveform::Square,
        }
    }

    pub const JUMP: SoundCue = SoundCue::square(440.0, 0.1);
    pub const DOUBLE_JUMP: SoundCue = SoundCue::square(550.0, 0.1);
    pub const STOMP: SoundCue = SoundCue::square(330.0, 0.15);
    pub const COLLECT: SoundCue = SoundCue::square(660.0, 0.1);
    pub const EXTRA_LIFE: SoundCue = SoundCue::square(880.0, 0.3);
    pub const POWER_UP: SoundCue = SoundCue::square(523.0, 0.2);
    pub const HIT: SoundCue = SoundCue::square(220.0, 0.3);
    pub const DEATH: SoundCue = SoundCue::square(165.0, 0.5);
    /// Played in order on victory.
    pub const VICTORY: [SoundCue; 3] = [
        SoundCue::square(523.0, 0.1),
        SoundCue::square(659.0, 0.1),
        SoundCue::square(784.0, 0.1),
    ];
}

pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Discards every cue.  Used when sound is disabled or unavailable.
#[derive(Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Rings the terminal bell for cues long enough to be worth hearing.
///
/// A terminal has one pitch, so only duration is honoured: anything shorter
/// than `min_duration` is dropped so footstep-rate cues (jumps) don't turn
/// into a constant buzz.  The first write failure disables the sink.
pub struct TerminalBell<W: Write> {
    out: W,
    min_duration: f32,
    enabled: bool,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            min_duration: 0.15,
            enabled: true,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: SoundCue) {
        if !self.enabled || cue.duration < self.min_duration {
            return;
        }
        let result = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!("terminal bell unavailable, sound disabled: {e}");
            self.enabled = false;
        }
    }
}

/// Build the sink the settings ask for.
pub fn sink_for(sound: bool) -> Box<dyn AudioSink> {
    if sound {
        Box::new(TerminalBell::new(std::io::stdout()))
    } else {
        info!("sound disabled; cues will be dropped");
        Box::new(NullAudio)
    }
}
