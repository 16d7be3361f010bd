//! Line commands typed at the terminal.

use mindarcade::color::Color;
use mindarcade::session::{GameMode, SessionState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Menu,
    Restart,
    Select(GameMode),
    /// One or more pad presses, in order.
    Colors(Vec<Color>),
    /// Raw text for the number box; validated by the engine.
    Number(String),
    Symbol(String),
    Unknown(String),
}

/// Interpret `line` against the current state. `options` are the symbol choices on
/// screen, addressable by their 1-based position.
pub fn parse_line(line: &str, state: SessionState, options: &[String]) -> Command {
    let word = line.trim();
    match word.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Command::Quit,
        "menu" | "m" if state != SessionState::MenuIdle => return Command::Menu,
        "restart" if state != SessionState::MenuIdle => return Command::Restart,
        _ => {}
    }

    match state {
        SessionState::MenuIdle => match word.to_ascii_lowercase().as_str() {
            "1" | "color" => Command::Select(GameMode::Color),
            "2" | "number" => Command::Select(GameMode::Number),
            "3" | "symbol" => Command::Select(GameMode::Symbol),
            _ => Command::Unknown(word.to_string()),
        },
        SessionState::ModeActive(GameMode::Color) => {
            let mut presses = Vec::new();
            for ch in word.chars().filter(|c| !c.is_whitespace()) {
                match Color::from_key(ch) {
                    Some(c) => presses.push(c),
                    None => return Command::Unknown(word.to_string()),
                }
            }
            if presses.is_empty() {
                Command::Unknown(word.to_string())
            } else {
                Command::Colors(presses)
            }
        }
        SessionState::ModeActive(GameMode::Number) => Command::Number(line.to_string()),
        SessionState::ModeActive(GameMode::Symbol) => {
            let picked = word
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| options.get(i));
            match picked {
                Some(glyph) => Command::Symbol(glyph.clone()),
                None => Command::Symbol(word.to_string()),
            }
        }
        SessionState::GameOver { .. } => Command::Unknown(word.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> Vec<String> {
        ["🌑", "🌒", "🌓", "🌔"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn menu_choices() {
        let s = SessionState::MenuIdle;
        assert_eq!(parse_line("1", s, &[]), Command::Select(GameMode::Color));
        assert_eq!(parse_line(" Number ", s, &[]), Command::Select(GameMode::Number));
        assert_eq!(parse_line("3\n", s, &[]), Command::Select(GameMode::Symbol));
        assert_eq!(parse_line("q", s, &[]), Command::Quit);
        // No game to leave yet.
        assert_eq!(parse_line("menu", s, &[]), Command::Unknown("menu".into()));
    }

    #[test]
    fn color_presses() {
        let s = SessionState::ModeActive(GameMode::Color);
        assert_eq!(
            parse_line("r g B", s, &[]),
            Command::Colors(vec![Color::Red, Color::Green, Color::Blue])
        );
        assert_eq!(parse_line("rx", s, &[]), Command::Unknown("rx".into()));
        assert_eq!(parse_line("", s, &[]), Command::Unknown(String::new()));
        assert_eq!(parse_line("restart", s, &[]), Command::Restart);
    }

    #[test]
    fn number_text_passes_through() {
        let s = SessionState::ModeActive(GameMode::Number);
        assert_eq!(parse_line("42\n", s, &[]), Command::Number("42\n".into()));
        assert_eq!(parse_line("abc", s, &[]), Command::Number("abc".into()));
        assert_eq!(parse_line("menu", s, &[]), Command::Menu);
    }

    #[test]
    fn symbol_by_index_or_glyph() {
        let s = SessionState::ModeActive(GameMode::Symbol);
        assert_eq!(parse_line("2", s, &opts()), Command::Symbol("🌒".into()));
        assert_eq!(parse_line("🌔", s, &opts()), Command::Symbol("🌔".into()));
        // Out-of-range picks pass through; the session ignores glyphs not on offer.
        assert_eq!(parse_line("0", s, &opts()), Command::Symbol("0".into()));
        assert_eq!(parse_line("9", s, &opts()), Command::Symbol("9".into()));
    }

    #[test]
    fn game_over_accepts_only_navigation() {
        let s = SessionState::GameOver {
            mode: GameMode::Number,
            final_score: 20,
        };
        assert_eq!(parse_line("restart", s, &[]), Command::Restart);
        assert_eq!(parse_line("m", s, &[]), Command::Menu);
        assert_eq!(parse_line("5", s, &[]), Command::Unknown("5".into()));
    }
}
