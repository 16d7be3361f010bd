//! Feedback tones.
//!
//! The engine only names a tone; synthesis belongs to the presentation adapter.

use crate::color::Color;
use crate::time::Duration;

/// How long an adapter should let a tone ring before it fades out.
pub const TONE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Sawtooth,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub waveform: Waveform,
}

impl Tone {
    pub const CORRECT: Tone = Tone::sine(600.0);
    pub const WRONG: Tone = Tone {
        frequency_hz: 150.0,
        waveform: Waveform::Sawtooth,
    };

    const fn sine(frequency_hz: f32) -> Self {
        Self {
            frequency_hz,
            waveform: Waveform::Sine,
        }
    }

    /// Pitch of a color pad (C4, E4, G4, B4).
    pub fn for_color(color: Color) -> Self {
        match color {
            Color::Green => Tone::sine(261.63),
            Color::Red => Tone::sine(329.63),
            Color::Yellow => Tone::sine(392.00),
            Color::Blue => Tone::sine(493.88),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_pads_have_distinct_pitches() {
        let mut hz: Vec<f32> = Color::ALL
            .iter()
            .map(|&c| Tone::for_color(c).frequency_hz)
            .collect();
        hz.sort_by(|a, b| a.total_cmp(b));
        hz.dedup();
        assert_eq!(hz.len(), 4);
    }

    #[test]
    fn wrong_tone_is_harsh() {
        assert_eq!(Tone::WRONG.waveform, Waveform::Sawtooth);
        assert!(Tone::WRONG.frequency_hz < Tone::CORRECT.frequency_hz);
    }
}
