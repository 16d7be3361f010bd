use crate::session::GameMode;
use crate::time::{Duration, Instant};

/// Per-session answer statistics.
#[derive(Debug, Clone)]
pub struct RunStats {
    pub answers: u32,
    pub correct: u32,
    response_total: Duration,
    input_opened_at: Option<Instant>,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            answers: 0,
            correct: 0,
            response_total: Duration::ZERO,
            input_opened_at: None,
        }
    }

    /// Input became available; the response clock starts here.
    pub fn open_input(&mut self) {
        self.input_opened_at = Some(Instant::now());
    }

    pub fn record_answer(&mut self, is_correct: bool) {
        if let Some(opened) = self.input_opened_at.take() {
            self.response_total += opened.elapsed();
        }
        self.answers += 1;
        if is_correct {
            self.correct += 1;
        }
    }

    pub fn accuracy(&self) -> f32 {
        if self.answers == 0 {
            0.0
        } else {
            self.correct as f32 / self.answers as f32
        }
    }

    pub fn mean_response(&self) -> Option<Duration> {
        if self.answers == 0 {
            None
        } else {
            Some(self.response_total / self.answers)
        }
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Best final score per mode, kept only for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct BestScores {
    color: u32,
    number: u32,
    symbol: u32,
}

impl BestScores {
    pub fn get(&self, mode: GameMode) -> u32 {
        match mode {
            GameMode::Color => self.color,
            GameMode::Number => self.number,
            GameMode::Symbol => self.symbol,
        }
    }

    /// Returns true when `score` beats the previous best.
    pub fn record(&mut self, mode: GameMode, score: u32) -> bool {
        let slot = match mode {
            GameMode::Color => &mut self.color,
            GameMode::Number => &mut self.number,
            GameMode::Symbol => &mut self.symbol,
        };
        if score > *slot {
            *slot = score;
            true
        } else {
            false
        }
    }
}
