use crate::error::ConfigError;
use crate::prng::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    pub fn label(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
        }
    }

    /// Single-key shortcut used by text front-ends.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'r' => Some(Color::Red),
            'b' => Some(Color::Blue),
            'g' => Some(Color::Green),
            'y' => Some(Color::Yellow),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered set of colors the pattern draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        for (i, c) in colors.iter().enumerate() {
            if colors[..i].contains(c) {
                return Err(ConfigError::DuplicateColor(*c));
            }
        }
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: Color::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPhase {
    /// No round has started since the last reset.
    Idle,
    /// The newest color is being shown; input is ignored.
    Presenting,
    AwaitingInput,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOutcome {
    /// Input arrived outside `AwaitingInput`.
    Ignored,
    /// Matches so far; more presses expected.
    Partial,
    /// The whole pattern was reproduced. The next round is up to the caller.
    RoundComplete,
    /// Mismatch. `completed_rounds` counts fully reproduced patterns.
    Failed { completed_rounds: u32 },
}

/// Simon-style memory game: the pattern grows by one color per round and the player
/// must replay all of it, checked press by press.
#[derive(Debug, Clone)]
pub struct ColorSequenceEngine {
    palette: Palette,
    pattern: Vec<Color>,
    input: Vec<Color>,
    level: u32,
    phase: ColorPhase,
}

impl ColorSequenceEngine {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            pattern: Vec::new(),
            input: Vec::new(),
            level: 0,
            phase: ColorPhase::Idle,
        }
    }

    pub fn reset(&mut self) {
        self.pattern.clear();
        self.input.clear();
        self.level = 0;
        self.phase = ColorPhase::Idle;
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> ColorPhase {
        self.phase
    }

    pub fn pattern(&self) -> &[Color] {
        &self.pattern
    }

    pub fn input(&self) -> &[Color] {
        &self.input
    }

    /// Rounds fully reproduced so far. The in-progress level does not count.
    pub fn completed_rounds(&self) -> u32 {
        self.level.saturating_sub(1)
    }

    /// Append one random color and enter `Presenting`. Returns the new color, which
    /// is the only one the caller needs to flash.
    pub fn start_new_round(&mut self, rng: &mut impl RandomSource) -> Color {
        self.input.clear();
        self.level += 1;
        let colors = self.palette.colors();
        let color = colors[rng.below(colors.len())];
        self.pattern.push(color);
        self.phase = ColorPhase::Presenting;
        debug!(level = self.level, %color, "color round");
        color
    }

    /// End of the reveal delay: start accepting presses.
    pub fn finish_presentation(&mut self) -> bool {
        if self.phase != ColorPhase::Presenting || self.pattern.is_empty() {
            return false;
        }
        self.phase = ColorPhase::AwaitingInput;
        true
    }

    pub fn submit_color(&mut self, color: Color) -> ColorOutcome {
        if self.phase != ColorPhase::AwaitingInput {
            return ColorOutcome::Ignored;
        }
        self.input.push(color);
        let idx = self.input.len() - 1;
        if self.pattern.get(idx) != Some(&color) {
            self.phase = ColorPhase::Failed;
            return ColorOutcome::Failed {
                completed_rounds: self.completed_rounds(),
            };
        }
        if self.input.len() == self.pattern.len() {
            self.input.clear();
            self.phase = ColorPhase::Presenting;
            return ColorOutcome::RoundComplete;
        }
        ColorOutcome::Partial
    }
}

impl Default for ColorSequenceEngine {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}
