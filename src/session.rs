//! Game session controller.
//!
//! One session hosts one mode at a time: it mounts the mode's engine, routes answers
//! to it, keeps the score and moves between menu, active play and game over. Delays
//! are requested from the presenter as [`Ticket`]s and come back through
//! [`GameSession::fire`]; a ticket minted before the latest state change is dropped.

use crate::adapter::{Feedback, Presenter, Screen};
use crate::color::{Color, ColorOutcome, ColorSequenceEngine, Palette};
use crate::config::ArcadeConfig;
use crate::error::ConfigError;
use crate::numeric::{parse_guess, NumberRound};
use crate::prng::{Prng, RandomSource};
use crate::stats::{BestScores, RunStats};
use crate::symbol::{SymbolCatalog, SymbolRound};
use crate::time::Duration;
use crate::tones::Tone;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Color,
    Number,
    Symbol,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Color, GameMode::Number, GameMode::Symbol];

    pub fn label(self) -> &'static str {
        match self {
            GameMode::Color => "color",
            GameMode::Number => "number",
            GameMode::Symbol => "symbol",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            GameMode::Color => "Color Memory",
            GameMode::Number => "Number Sequence",
            GameMode::Symbol => "Symbol Puzzle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    MenuIdle,
    ModeActive(GameMode),
    /// Terminal until restart or return to menu.
    GameOver { mode: GameMode, final_score: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketAction {
    /// Flash the newest color and open input.
    RevealColor,
    NextRound,
    ShowGameOver,
}

/// A deferred callback, stamped with the session and round it was minted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub epoch: u64,
    pub round: u64,
    pub action: TicketAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer<'a> {
    Color(Color),
    Number(i64),
    Symbol(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Wrong state, wrong mode, malformed input or an already-consumed round.
    Ignored,
    /// Color press that matched but did not finish the pattern.
    Partial,
    Correct { score: u32 },
    GameOver { final_score: u32 },
}

#[derive(Debug)]
enum ActiveEngine {
    None,
    Color(ColorSequenceEngine),
    /// `None` between an answer and the next round.
    Number(Option<NumberRound>),
    Symbol(Option<SymbolRound>),
}

enum Verdict {
    Correct,
    Wrong { hint: Option<&'static str> },
}

pub struct GameSession<R: RandomSource = Prng> {
    config: ArcadeConfig,
    palette: Palette,
    catalog: SymbolCatalog,
    rng: R,

    state: SessionState,
    engine: ActiveEngine,
    score: u32,

    epoch: u64,
    round: u64,

    stats: RunStats,
    best: BestScores,
}

impl GameSession<Prng> {
    /// Build from config, seeding from `config.seed` or the clock.
    pub fn from_config(config: ArcadeConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => Prng::new(seed),
            None => Prng::from_clock(),
        };
        Self::new(config, rng)
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Validates the static game data up front so no round can start on bad data.
    pub fn new(config: ArcadeConfig, rng: R) -> Result<Self, ConfigError> {
        let palette = config.palette()?;
        let catalog = config.catalog()?;
        Ok(Self {
            config,
            palette,
            catalog,
            rng,
            state: SessionState::MenuIdle,
            engine: ActiveEngine::None,
            score: 0,
            epoch: 0,
            round: 0,
            stats: RunStats::new(),
            best: BestScores::default(),
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn mode(&self) -> Option<GameMode> {
        match self.state {
            SessionState::MenuIdle => None,
            SessionState::ModeActive(mode) | SessionState::GameOver { mode, .. } => Some(mode),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn config(&self) -> &ArcadeConfig {
        &self.config
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn best_scores(&self) -> &BestScores {
        &self.best
    }

    pub fn color_engine(&self) -> Option<&ColorSequenceEngine> {
        match &self.engine {
            ActiveEngine::Color(e) => Some(e),
            _ => None,
        }
    }

    /// The open numeric round, if one is awaiting an answer.
    pub fn number_round(&self) -> Option<&NumberRound> {
        match &self.engine {
            ActiveEngine::Number(r) => r.as_ref(),
            _ => None,
        }
    }

    /// The open symbol round, if one is awaiting an answer.
    pub fn symbol_round(&self) -> Option<&SymbolRound> {
        match &self.engine {
            ActiveEngine::Symbol(r) => r.as_ref(),
            _ => None,
        }
    }

    /// Start a fresh session in `mode`, discarding whatever was running.
    pub fn select_mode(&mut self, mode: GameMode, p: &mut dyn Presenter) {
        self.epoch += 1;
        self.score = 0;
        self.stats = RunStats::new();
        self.state = SessionState::ModeActive(mode);
        info!(mode = mode.label(), epoch = self.epoch, "mode selected");

        p.set_score(0);
        match mode {
            GameMode::Color => {
                self.engine = ActiveEngine::Color(ColorSequenceEngine::new(self.palette.clone()));
                p.show_screen(Screen::Color);
            }
            GameMode::Number => {
                self.engine = ActiveEngine::Number(None);
                p.show_screen(Screen::Logic);
                p.set_title(mode.title());
            }
            GameMode::Symbol => {
                self.engine = ActiveEngine::Symbol(None);
                p.show_screen(Screen::Logic);
                p.set_title(mode.title());
            }
        }
        self.begin_round(p);
    }

    /// Replay the current (or just finished) mode from scratch.
    pub fn restart(&mut self, p: &mut dyn Presenter) -> bool {
        match self.mode() {
            Some(mode) => {
                info!(mode = mode.label(), "restart");
                self.select_mode(mode, p);
                true
            }
            None => {
                warn!("restart requested with no mode selected");
                false
            }
        }
    }

    pub fn return_to_menu(&mut self, p: &mut dyn Presenter) {
        self.epoch += 1;
        self.state = SessionState::MenuIdle;
        self.engine = ActiveEngine::None;
        self.score = 0;
        info!(epoch = self.epoch, "back to menu");
        p.show_screen(Screen::Menu);
    }

    pub fn on_color_button_pressed(&mut self, color: Color, p: &mut dyn Presenter) -> AnswerOutcome {
        self.submit_answer(Answer::Color(color), p)
    }

    /// Text that does not start with a number is dropped without feedback.
    pub fn on_number_submitted(&mut self, raw: &str, p: &mut dyn Presenter) -> AnswerOutcome {
        match parse_guess(raw) {
            Some(n) => self.submit_answer(Answer::Number(n), p),
            None => {
                debug!(raw, "ignoring non-numeric guess");
                AnswerOutcome::Ignored
            }
        }
    }

    pub fn on_symbol_option_chosen(&mut self, term: &str, p: &mut dyn Presenter) -> AnswerOutcome {
        self.submit_answer(Answer::Symbol(term), p)
    }

    pub fn on_restart_requested(&mut self, p: &mut dyn Presenter) -> bool {
        self.restart(p)
    }

    pub fn on_menu_requested(&mut self, p: &mut dyn Presenter) {
        self.return_to_menu(p)
    }

    /// Route an answer to the mounted engine and apply the verdict.
    pub fn submit_answer(&mut self, answer: Answer<'_>, p: &mut dyn Presenter) -> AnswerOutcome {
        let SessionState::ModeActive(mode) = self.state else {
            debug!(?answer, state = ?self.state, "answer outside active play");
            return AnswerOutcome::Ignored;
        };

        let verdict = match (&mut self.engine, answer) {
            (ActiveEngine::Color(engine), Answer::Color(color)) => {
                let outcome = engine.submit_color(color);
                if outcome == ColorOutcome::Ignored {
                    return AnswerOutcome::Ignored;
                }
                p.highlight_color(color);
                p.play_tone(Tone::for_color(color));
                match outcome {
                    ColorOutcome::Partial => return AnswerOutcome::Partial,
                    ColorOutcome::RoundComplete => Verdict::Correct,
                    _ => Verdict::Wrong { hint: None },
                }
            }
            (ActiveEngine::Number(slot), Answer::Number(guess)) => {
                let Some(round) = slot.take() else {
                    return AnswerOutcome::Ignored;
                };
                if round.is_correct(guess) {
                    Verdict::Correct
                } else {
                    Verdict::Wrong {
                        hint: Some(round.family.hint_text()),
                    }
                }
            }
            (ActiveEngine::Symbol(slot), Answer::Symbol(choice)) => {
                // Only a glyph on offer answers the round.
                let offered = slot
                    .as_ref()
                    .is_some_and(|r| r.options.iter().any(|o| o == choice));
                if !offered {
                    debug!(choice, "symbol not among the options");
                    return AnswerOutcome::Ignored;
                }
                let Some(round) = slot.take() else {
                    return AnswerOutcome::Ignored;
                };
                if round.is_correct(choice) {
                    Verdict::Correct
                } else {
                    Verdict::Wrong { hint: None }
                }
            }
            _ => {
                warn!(mode = mode.label(), ?answer, "answer does not fit the active mode");
                return AnswerOutcome::Ignored;
            }
        };

        match verdict {
            Verdict::Correct => {
                self.stats.record_answer(true);
                self.score += self.config.scoring.for_mode(mode);
                p.set_score(self.score);
                if mode != GameMode::Color {
                    p.flash_feedback(Feedback::Correct);
                    p.play_tone(Tone::CORRECT);
                }
                self.schedule(self.config.timings.next_round(mode), TicketAction::NextRound, p);
                AnswerOutcome::Correct { score: self.score }
            }
            Verdict::Wrong { hint } => {
                self.stats.record_answer(false);
                if let Some(hint) = hint {
                    p.show_hint(hint);
                }
                self.game_over(mode, p)
            }
        }
    }

    /// Handle a ticket whose delay has elapsed. Returns false for stale tickets.
    pub fn fire(&mut self, ticket: Ticket, p: &mut dyn Presenter) -> bool {
        if ticket.epoch != self.epoch || ticket.round != self.round {
            debug!(?ticket, epoch = self.epoch, round = self.round, "dropping stale ticket");
            return false;
        }

        match (ticket.action, self.state) {
            (TicketAction::RevealColor, SessionState::ModeActive(GameMode::Color)) => {
                let ActiveEngine::Color(engine) = &mut self.engine else {
                    return false;
                };
                let Some(&newest) = engine.pattern().last() else {
                    return false;
                };
                if !engine.finish_presentation() {
                    return false;
                }
                p.highlight_color(newest);
                p.play_tone(Tone::for_color(newest));
                self.stats.open_input();
                true
            }
            (TicketAction::NextRound, SessionState::ModeActive(_)) => {
                self.begin_round(p);
                true
            }
            (TicketAction::ShowGameOver, SessionState::GameOver { .. }) => {
                p.show_screen(Screen::GameOver);
                true
            }
            (action, state) => {
                debug!(?action, ?state, "ticket does not apply");
                false
            }
        }
    }

    fn begin_round(&mut self, p: &mut dyn Presenter) {
        match &mut self.engine {
            ActiveEngine::None => {}
            ActiveEngine::Color(engine) => {
                engine.start_new_round(&mut self.rng);
                p.set_title(&format!("Level {}", engine.level()));
                let reveal = self.config.timings.color_reveal();
                self.schedule(reveal, TicketAction::RevealColor, p);
            }
            ActiveEngine::Number(slot) => {
                let round = NumberRound::generate(self.score, &mut self.rng);
                p.render_sequence(&round.display_terms());
                *slot = Some(round);
                self.stats.open_input();
            }
            ActiveEngine::Symbol(slot) => {
                let round = SymbolRound::generate(&self.catalog, &mut self.rng);
                p.render_sequence(&round.visible);
                p.render_options(&round.options);
                *slot = Some(round);
                self.stats.open_input();
            }
        }
    }

    fn game_over(&mut self, mode: GameMode, p: &mut dyn Presenter) -> AnswerOutcome {
        let final_score = self.score;
        self.state = SessionState::GameOver { mode, final_score };
        let best = self.best.record(mode, final_score);
        info!(mode = mode.label(), final_score, new_best = best, "game over");

        p.flash_feedback(Feedback::Wrong);
        p.play_tone(Tone::WRONG);
        p.show_final_score(final_score);
        self.schedule(self.config.timings.game_over_flash(), TicketAction::ShowGameOver, p);
        AnswerOutcome::GameOver { final_score }
    }

    /// Mint a ticket for the next round id. Any ticket still in flight goes stale.
    fn schedule(&mut self, delay: Duration, action: TicketAction, p: &mut dyn Presenter) {
        self.round += 1;
        let ticket = Ticket {
            epoch: self.epoch,
            round: self.round,
            action,
        };
        debug!(?ticket, ?delay, "schedule");
        p.schedule(delay, ticket);
    }
}
