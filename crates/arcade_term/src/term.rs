//! Line-oriented terminal presenter.
//!
//! Screens are printed top to bottom; tones become the terminal bell. Timers are
//! tokio tasks that post the ticket back to the main loop.

use mindarcade::adapter::{Feedback, Presenter, Screen};
use mindarcade::color::Color;
use mindarcade::session::{GameMode, Ticket};
use mindarcade::stats::{BestScores, RunStats};
use mindarcade::time::Duration;
use mindarcade::tones::Tone;
use std::io::Write as _;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, trace};

const RESET: &str = "\x1b[0m";

fn swatch(color: Color) -> &'static str {
    match color {
        Color::Red => "\x1b[41;97m",
        Color::Blue => "\x1b[44;97m",
        Color::Green => "\x1b[42;30m",
        Color::Yellow => "\x1b[43;30m",
    }
}

pub struct TerminalPresenter {
    tickets: UnboundedSender<Ticket>,
    bell: bool,
    final_score: u32,
}

impl TerminalPresenter {
    pub fn new(tickets: UnboundedSender<Ticket>, bell: bool) -> Self {
        Self {
            tickets,
            bell,
            final_score: 0,
        }
    }

    pub fn print_menu(&self) {
        println!();
        println!("=== Mind Arcade ===");
        for (i, mode) in GameMode::ALL.iter().enumerate() {
            println!("  {}) {}", i + 1, mode.title());
        }
        println!("  q) quit");
    }

    pub fn print_summary(&self, mode: GameMode, stats: &RunStats, best: &BestScores) {
        print!("  answered {} ({} correct)", stats.answers, stats.correct);
        if let Some(mean) = stats.mean_response() {
            print!(", mean response {:.1}s", mean.as_secs_f32());
        }
        println!(", best {} this run: {}", mode.label(), best.get(mode));
    }

    pub fn note(&self, text: &str) {
        println!("  ({text})");
    }
}

impl Presenter for TerminalPresenter {
    fn render_sequence(&mut self, terms: &[String]) {
        println!();
        println!("  {}  ?", terms.join("  "));
    }

    fn render_options(&mut self, options: &[String]) {
        let line: Vec<String> = options
            .iter()
            .enumerate()
            .map(|(i, o)| format!("[{}] {}", i + 1, o))
            .collect();
        println!("  {}", line.join("   "));
    }

    fn flash_feedback(&mut self, kind: Feedback) {
        match kind {
            Feedback::Correct => println!("  Correct!"),
            Feedback::Wrong => println!("  Wrong!"),
        }
    }

    fn play_tone(&mut self, tone: Tone) {
        trace!(hz = tone.frequency_hz, waveform = ?tone.waveform, "tone");
        if self.bell {
            print!("\x07");
            let _ = std::io::stdout().flush();
        }
    }

    fn highlight_color(&mut self, color: Color) {
        println!("  {} {:^8} {}", swatch(color), color.label(), RESET);
    }

    fn show_screen(&mut self, screen: Screen) {
        match screen {
            Screen::Menu => self.print_menu(),
            Screen::Color => {
                println!();
                println!("=== {} ===", GameMode::Color.title());
                println!("  watch the new color, then replay the whole pattern: r g b y");
            }
            Screen::Logic => {
                println!();
                println!("  what comes next? ('restart', 'menu', 'q')");
            }
            Screen::GameOver => {
                println!();
                println!("=== GAME OVER ===  final score: {}", self.final_score);
                println!("  'restart', 'menu' or 'q'");
            }
        }
    }

    fn set_score(&mut self, value: u32) {
        println!("  score: {value}");
    }

    fn set_title(&mut self, text: &str) {
        println!("--- {text} ---");
    }

    fn show_hint(&mut self, text: &str) {
        println!("  {text}");
    }

    fn show_final_score(&mut self, value: u32) {
        self.final_score = value;
    }

    fn schedule(&mut self, delay: Duration, ticket: Ticket) {
        debug!(?delay, ?ticket, "timer");
        let tx = self.tickets.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver only goes away at shutdown.
            let _ = tx.send(ticket);
        });
    }
}
