//! # mindarcade
//!
//! Engine for a small arcade of memory and sequence games:
//!
//! - color recall: replay a growing pattern of colors, one press at a time
//! - number sequences: predict the next term of an arithmetic, geometric, fibonacci,
//!   square, cube or triangular sequence
//! - symbol sequences: pick the symbol that continues a cycle out of four options
//!
//! Rendering, sound and timers live behind the [`adapter::Presenter`] trait. The
//! engine never sleeps: it hands the presenter a [`session::Ticket`] and expects it
//! back through [`session::GameSession::fire`] once the delay has passed.
//!
//! ## Quick Start
//!
//! ```
//! use mindarcade::prelude::*;
//!
//! let mut session = GameSession::new(ArcadeConfig::default(), Prng::new(42)).unwrap();
//! let mut presenter = RecordingPresenter::new();
//!
//! session.select_mode(GameMode::Number, &mut presenter);
//! let answer = session.number_round().unwrap().answer;
//! let outcome = session.on_number_submitted(&answer.to_string(), &mut presenter);
//! assert_eq!(outcome, AnswerOutcome::Correct { score: 10 });
//! ```
//!
//! ## Modules
//!
//! - [`numeric`]: sequence families, difficulty gate and numeric rounds
//! - [`symbol`]: symbol catalog and symbol rounds
//! - [`color`]: the growing color pattern
//! - [`session`]: menu / play / game-over controller
//! - [`adapter`]: the presenter seam

pub mod adapter;
pub mod color;
pub mod config;
pub mod error;
pub mod numeric;
pub mod prng;
pub mod session;
pub mod stats;
pub mod symbol;
pub mod time;
pub mod tones;

/// Prelude module for convenient imports.
///
/// ```
/// use mindarcade::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adapter::{Feedback, Presenter, RecordingPresenter, Screen};
    pub use crate::color::{Color, ColorSequenceEngine, Palette};
    pub use crate::config::ArcadeConfig;
    pub use crate::error::ConfigError;
    pub use crate::numeric::{NumberRound, SequenceFamily};
    pub use crate::prng::{Prng, RandomSource};
    pub use crate::session::{
        Answer, AnswerOutcome, GameMode, GameSession, SessionState, Ticket, TicketAction,
    };
    pub use crate::symbol::{SymbolCatalog, SymbolRound};
    pub use crate::tones::{Tone, Waveform};
}
