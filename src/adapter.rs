//! Seam between the engine and whatever draws screens and plays sounds.
//!
//! The engine calls into a [`Presenter`]; the presenter calls back into
//! [`GameSession`](crate::session::GameSession) with user events and fired timers.

use crate::color::Color;
use crate::session::Ticket;
use crate::time::Duration;
use crate::tones::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Color,
    /// Shared by the number and symbol games.
    Logic,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong,
}

pub trait Presenter {
    /// Show the visible terms. The presenter appends the "?" placeholder itself.
    fn render_sequence(&mut self, terms: &[String]);

    /// Symbol mode answer buttons, in display order.
    fn render_options(&mut self, options: &[String]);

    fn flash_feedback(&mut self, kind: Feedback);

    fn play_tone(&mut self, tone: Tone);

    /// Briefly light a color pad (reveal or press).
    fn highlight_color(&mut self, color: Color);

    fn show_screen(&mut self, screen: Screen);

    fn set_score(&mut self, value: u32);

    fn set_title(&mut self, text: &str);

    fn show_hint(&mut self, text: &str);

    fn show_final_score(&mut self, value: u32);

    /// Arrange for `ticket` to be passed to `GameSession::fire` once `delay` elapses.
    fn schedule(&mut self, delay: Duration, ticket: Ticket);
}

/// Everything a [`RecordingPresenter`] was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterCall {
    Sequence(Vec<String>),
    Options(Vec<String>),
    Feedback(Feedback),
    Tone(Tone),
    Highlight(Color),
    Screen(Screen),
    Score(u32),
    Title(String),
    Hint(String),
    FinalScore(u32),
    Schedule(Duration, Ticket),
}

/// Headless presenter that records calls and queues scheduled tickets.
///
/// Drives sessions without a UI, e.g. in tests and benchmarks.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub calls: Vec<PresenterCall>,
    pending: Vec<Ticket>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the tickets scheduled so far, oldest first.
    pub fn take_pending(&mut self) -> Vec<Ticket> {
        std::mem::take(&mut self.pending)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn last_screen(&self) -> Option<Screen> {
        self.calls.iter().rev().find_map(|c| match c {
            PresenterCall::Screen(s) => Some(*s),
            _ => None,
        })
    }

    pub fn last_sequence(&self) -> Option<&[String]> {
        self.calls.iter().rev().find_map(|c| match c {
            PresenterCall::Sequence(s) => Some(s.as_slice()),
            _ => None,
        })
    }

    pub fn last_options(&self) -> Option<&[String]> {
        self.calls.iter().rev().find_map(|c| match c {
            PresenterCall::Options(o) => Some(o.as_slice()),
            _ => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn render_sequence(&mut self, terms: &[String]) {
        self.calls.push(PresenterCall::Sequence(terms.to_vec()));
    }

    fn render_options(&mut self, options: &[String]) {
        self.calls.push(PresenterCall::Options(options.to_vec()));
    }

    fn flash_feedback(&mut self, kind: Feedback) {
        self.calls.push(PresenterCall::Feedback(kind));
    }

    fn play_tone(&mut self, tone: Tone) {
        self.calls.push(PresenterCall::Tone(tone));
    }

    fn highlight_color(&mut self, color: Color) {
        self.calls.push(PresenterCall::Highlight(color));
    }

    fn show_screen(&mut self, screen: Screen) {
        self.calls.push(PresenterCall::Screen(screen));
    }

    fn set_score(&mut self, value: u32) {
        self.calls.push(PresenterCall::Score(value));
    }

    fn set_title(&mut self, text: &str) {
        self.calls.push(PresenterCall::Title(text.to_string()));
    }

    fn show_hint(&mut self, text: &str) {
        self.calls.push(PresenterCall::Hint(text.to_string()));
    }

    fn show_final_score(&mut self, value: u32) {
        self.calls.push(PresenterCall::FinalScore(value));
    }

    fn schedule(&mut self, delay: Duration, ticket: Ticket) {
        self.calls.push(PresenterCall::Schedule(delay, ticket));
        self.pending.push(ticket);
    }
}
