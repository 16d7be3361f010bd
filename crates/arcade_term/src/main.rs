//! Mind Arcade terminal front-end
//!
//! Plays the three games on stdin/stdout:
//! - Color Memory: replay the growing pattern with r/g/b/y
//! - Number Sequence: type the next number
//! - Symbol Puzzle: pick the next symbol by its option number
//!
//! Config is read from `<config dir>/mindarcade/config.json` when it exists, or from
//! `--config <path>`. Logs go to stderr and honor `RUST_LOG`.

use mindarcade::prelude::*;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod error;
mod input;
mod paths;
mod term;

use error::AppError;
use input::{parse_line, Command};
use paths::AppPaths;
use term::TerminalPresenter;

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    quiet: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, AppError> {
    let mut out = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| AppError::Usage("--config needs a path".to_string()))?;
                out.config = Some(PathBuf::from(path));
            }
            "--quiet" | "-q" => out.quiet = true,
            other => return Err(AppError::Usage(format!("unknown argument {other:?}"))),
        }
    }
    Ok(out)
}

fn load_config(explicit: Option<PathBuf>) -> Result<ArcadeConfig, AppError> {
    let (path, required) = match explicit {
        Some(p) => (p, true),
        None => (AppPaths::new()?.config_file(), false),
    };

    if !required && !path.exists() {
        info!("No config at {:?}; using defaults", path);
        return Ok(ArcadeConfig::default());
    }

    let text = std::fs::read_to_string(&path).map_err(|source| AppError::ReadConfig {
        path: path.clone(),
        source,
    })?;
    let cfg = ArcadeConfig::from_json(&text).map_err(|source| AppError::Config {
        path: path.clone(),
        source,
    })?;
    info!("Config loaded from {:?}", path);
    Ok(cfg)
}

/// Apply one typed line. Returns false when the player quits.
fn handle_line(line: &str, session: &mut GameSession, presenter: &mut TerminalPresenter) -> bool {
    let options: Vec<String> = session
        .symbol_round()
        .map(|r| r.options.clone())
        .unwrap_or_default();

    match parse_line(line, session.state(), &options) {
        Command::Quit => return false,
        Command::Menu => session.on_menu_requested(presenter),
        Command::Restart => {
            session.on_restart_requested(presenter);
        }
        Command::Select(mode) => session.select_mode(mode, presenter),
        Command::Colors(presses) => {
            for color in presses {
                match session.on_color_button_pressed(color, presenter) {
                    AnswerOutcome::Ignored => {
                        presenter.note("wait for the pattern");
                        break;
                    }
                    AnswerOutcome::GameOver { .. } => break,
                    AnswerOutcome::Partial | AnswerOutcome::Correct { .. } => {}
                }
            }
        }
        Command::Number(raw) => {
            session.on_number_submitted(&raw, presenter);
        }
        Command::Symbol(glyph) => {
            if session.on_symbol_option_chosen(&glyph, presenter) == AnswerOutcome::Ignored {
                presenter.note("pick one of the numbered options");
            }
        }
        Command::Unknown(text) => {
            if !text.is_empty() {
                warn!(input = %text, "unrecognized input");
                presenter.note("not understood");
            }
        }
    }
    true
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize logging on stderr so it never interleaves with the game.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = load_config(args.config)?;
    let mut session = GameSession::from_config(config)?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut presenter = TerminalPresenter::new(tx, !args.quiet);
    presenter.show_screen(Screen::Menu);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if !handle_line(&line, &mut session, &mut presenter) {
                    break;
                }
            }
            Some(ticket) = rx.recv() => {
                let shown = session.fire(ticket, &mut presenter);
                if shown && ticket.action == TicketAction::ShowGameOver {
                    if let Some(mode) = session.mode() {
                        presenter.print_summary(mode, session.stats(), session.best_scores());
                    }
                }
            }
        }
    }

    info!("Goodbye");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, AppError> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_config_flag() {
        let a = args(&["--config", "/tmp/arcade.json", "-q"]).unwrap();
        assert_eq!(a.config, Some(PathBuf::from("/tmp/arcade.json")));
        assert!(a.quiet);
    }

    #[test]
    fn rejects_unknown_and_dangling_flags() {
        assert!(matches!(args(&["--config"]), Err(AppError::Usage(_))));
        assert!(matches!(args(&["--fast"]), Err(AppError::Usage(_))));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let missing = std::env::temp_dir().join("mindarcade-no-such-config.json");
        assert!(matches!(
            load_config(Some(missing)),
            Err(AppError::ReadConfig { .. })
        ));
    }

    #[test]
    fn explicit_config_is_validated() {
        let path = std::env::temp_dir().join(format!(
            "mindarcade-bad-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"palette": []}"#).unwrap();
        let res = load_config(Some(path.clone()));
        let _ = std::fs::remove_file(&path);
        assert!(matches!(res, Err(AppError::Config { .. })));
    }
}
