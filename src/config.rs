//! Tunable constants: delays, score increments and static game data.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use crate::color::{Color, Palette};
use crate::error::ConfigError;
use crate::session::GameMode;
use crate::symbol::{default_cycles, SymbolCatalog};
use crate::time::Duration;
use serde::{Deserialize, Serialize};

fn default_color_reveal_ms() -> u64 {
    500
}

fn default_color_next_round_ms() -> u64 {
    1000
}

fn default_logic_next_round_ms() -> u64 {
    800
}

fn default_game_over_flash_ms() -> u64 {
    200
}

fn default_color_increment() -> u32 {
    1
}

fn default_logic_increment() -> u32 {
    10
}

fn default_palette() -> Vec<Color> {
    Color::ALL.to_vec()
}

/// One-shot delays, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    /// New color appended -> color flashed and input opens.
    #[serde(default = "default_color_reveal_ms")]
    pub color_reveal_ms: u64,
    #[serde(default = "default_color_next_round_ms")]
    pub color_next_round_ms: u64,
    #[serde(default = "default_logic_next_round_ms")]
    pub logic_next_round_ms: u64,
    #[serde(default = "default_game_over_flash_ms")]
    pub game_over_flash_ms: u64,
}

impl Timings {
    pub fn color_reveal(&self) -> Duration {
        Duration::from_millis(self.color_reveal_ms)
    }

    pub fn next_round(&self, mode: GameMode) -> Duration {
        match mode {
            GameMode::Color => Duration::from_millis(self.color_next_round_ms),
            GameMode::Number | GameMode::Symbol => {
                Duration::from_millis(self.logic_next_round_ms)
            }
        }
    }

    pub fn game_over_flash(&self) -> Duration {
        Duration::from_millis(self.game_over_flash_ms)
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            color_reveal_ms: default_color_reveal_ms(),
            color_next_round_ms: default_color_next_round_ms(),
            logic_next_round_ms: default_logic_next_round_ms(),
            game_over_flash_ms: default_game_over_flash_ms(),
        }
    }
}

/// Points awarded per success. Color counts rounds; the logic games award tens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreIncrements {
    #[serde(default = "default_color_increment")]
    pub color: u32,
    #[serde(default = "default_logic_increment")]
    pub number: u32,
    #[serde(default = "default_logic_increment")]
    pub symbol: u32,
}

impl ScoreIncrements {
    pub fn for_mode(&self, mode: GameMode) -> u32 {
        match mode {
            GameMode::Color => self.color,
            GameMode::Number => self.number,
            GameMode::Symbol => self.symbol,
        }
    }
}

impl Default for ScoreIncrements {
    fn default() -> Self {
        Self {
            color: default_color_increment(),
            number: default_logic_increment(),
            symbol: default_logic_increment(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArcadeConfig {
    #[serde(default)]
    pub timings: Timings,
    #[serde(default)]
    pub scoring: ScoreIncrements,
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
    #[serde(default = "default_cycles")]
    pub symbol_cycles: Vec<Vec<String>>,
    /// Fixed PRNG seed. `None` seeds from the clock.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            scoring: ScoreIncrements::default(),
            palette: default_palette(),
            symbol_cycles: default_cycles(),
            seed: None,
        }
    }
}

impl ArcadeConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: ArcadeConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.palette()?;
        self.catalog()?;
        Ok(())
    }

    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Palette::new(self.palette.clone())
    }

    pub fn catalog(&self) -> Result<SymbolCatalog, ConfigError> {
        SymbolCatalog::new(self.symbol_cycles.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let cfg = ArcadeConfig::from_json("{}").unwrap();
        assert_eq!(cfg, ArcadeConfig::default());
        assert_eq!(cfg.timings.color_reveal_ms, 500);
        assert_eq!(cfg.scoring.for_mode(GameMode::Color), 1);
        assert_eq!(cfg.scoring.for_mode(GameMode::Symbol), 10);
    }

    #[test]
    fn partial_overrides() {
        let cfg = ArcadeConfig::from_json(
            r#"{"timings": {"logic_next_round_ms": 50}, "palette": ["green", "red"], "seed": 7}"#,
        )
        .unwrap();
        assert_eq!(cfg.timings.logic_next_round_ms, 50);
        assert_eq!(cfg.timings.color_next_round_ms, 1000);
        assert_eq!(cfg.timings.next_round(GameMode::Number), Duration::from_millis(50));
        assert_eq!(cfg.palette, vec![Color::Green, Color::Red]);
        assert_eq!(cfg.seed, Some(7));
    }

    #[test]
    fn bad_static_data_is_rejected() {
        assert!(matches!(
            ArcadeConfig::from_json(r#"{"palette": []}"#),
            Err(ConfigError::EmptyPalette)
        ));
        assert!(matches!(
            ArcadeConfig::from_json(r#"{"symbol_cycles": [["a", "b", "c", "d"], []]}"#),
            Err(ConfigError::ShortCycle { index: 1, .. })
        ));
        assert!(matches!(
            ArcadeConfig::from_json(r#"{"palette": ["purple"]}"#),
            Err(ConfigError::Parse(_))
        ));
    }
}
