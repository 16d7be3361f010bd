use crate::error::ConfigError;
use crate::prng::RandomSource;
use tracing::debug;

/// Visible symbols per round; one more is hidden as the answer.
pub const VISIBLE_SYMBOLS: usize = 3;
/// Answer choices offered per round.
pub const OPTION_COUNT: usize = 4;

/// Shortest cycle that can host a round window and four distinct options.
const MIN_CYCLE_LEN: usize = VISIBLE_SYMBOLS + 1;

pub fn default_cycles() -> Vec<Vec<String>> {
    const CYCLES: [[&str; 5]; 5] = [
        ["🌑", "🌒", "🌓", "🌔", "🌕"],
        ["🕐", "🕑", "🕒", "🕓", "🕔"],
        ["⬆️", "↗️", "➡️", "↘️", "⬇️"],
        ["🌱", "🌿", "🌳", "🍂", "💀"],
        ["1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣"],
    ];
    CYCLES
        .iter()
        .map(|c| c.iter().map(|s| s.to_string()).collect())
        .collect()
}

/// Fixed list of ordered symbol cycles. Validated on construction.
#[derive(Debug, Clone)]
pub struct SymbolCatalog {
    cycles: Vec<Vec<String>>,
}

impl SymbolCatalog {
    pub fn new(cycles: Vec<Vec<String>>) -> Result<Self, ConfigError> {
        if cycles.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        for (index, cycle) in cycles.iter().enumerate() {
            let mut distinct: Vec<&String> = Vec::with_capacity(cycle.len());
            for glyph in cycle {
                if !distinct.contains(&glyph) {
                    distinct.push(glyph);
                }
            }
            // Distinct glyphs bound the option loop; length bounds the window.
            if distinct.len() < MIN_CYCLE_LEN {
                return Err(ConfigError::ShortCycle {
                    index,
                    distinct: distinct.len(),
                });
            }
        }
        Ok(Self { cycles })
    }

    pub fn cycles(&self) -> &[Vec<String>] {
        &self.cycles
    }
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        Self {
            cycles: default_cycles(),
        }
    }
}

/// One symbol question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRound {
    /// Index of the cycle in the catalog.
    pub cycle: usize,
    /// Start of the visible window within the cycle.
    pub offset: usize,
    pub visible: Vec<String>,
    /// Glyph that follows the window.
    pub answer: String,
    /// Answer plus distractors, shuffled.
    pub options: Vec<String>,
}

impl SymbolRound {
    pub fn generate(catalog: &SymbolCatalog, rng: &mut impl RandomSource) -> Self {
        let cycle_idx = rng.below(catalog.cycles.len());
        let cycle = &catalog.cycles[cycle_idx];
        let offset = rng.below(cycle.len() - VISIBLE_SYMBOLS);
        Self::from_window(cycle_idx, cycle, offset, rng)
    }

    fn from_window(
        cycle_idx: usize,
        cycle: &[String],
        offset: usize,
        rng: &mut impl RandomSource,
    ) -> Self {
        let visible = cycle[offset..offset + VISIBLE_SYMBOLS].to_vec();
        let answer = cycle[offset + VISIBLE_SYMBOLS].clone();

        let mut options = vec![answer.clone()];
        while options.len() < OPTION_COUNT {
            if let Some(glyph) = rng.pick(cycle) {
                if !options.contains(glyph) {
                    options.push(glyph.clone());
                }
            }
        }
        rng.shuffle(&mut options);

        debug!(cycle = cycle_idx, offset, ?visible, %answer, "symbol round");
        Self {
            cycle: cycle_idx,
            offset,
            visible,
            answer,
            options,
        }
    }

    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.answer
    }
}
