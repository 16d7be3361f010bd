use crate::color::Color;
use thiserror::Error;

/// Static game data that cannot host a round.
///
/// Raised when a session is built, before any round starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("symbol catalog has no cycles")]
    EmptyCatalog,

    #[error("symbol cycle {index} has {distinct} distinct glyphs, at least 4 are required")]
    ShortCycle { index: usize, distinct: usize },

    #[error("color palette is empty")]
    EmptyPalette,

    #[error("color palette lists {0} more than once")]
    DuplicateColor(Color),

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
