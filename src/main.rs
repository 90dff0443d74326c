use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use countonme::calculator::{CalculatorEngine, parse_keystrokes};
use countonme::clipboard::copy_to_clipboard;
use countonme::config::Config;
use countonme::display::DisplaySnapshot;

/// Keystroke-driven pocket calculator.
///
/// Each input line is a sequence of keys: digits, `.`, `+ - * /` (or
/// `x ÷`), `=` to compute and `c`/`AC` to clear.
#[derive(Parser, Debug)]
#[command(name = "countonme", version, about)]
struct Cli {
    /// Keys to press, e.g. "12+3*4=". Reads lines from stdin when omitted.
    #[arg(short, long)]
    keys: Option<String>,

    /// Path to the config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Copy each result to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Print a JSON snapshot after each input line.
    #[arg(long)]
    json: bool,

    /// Fractional digits shown in results (0-5).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=5))]
    precision: Option<u8>,
}

struct Session {
    engine: CalculatorEngine,
    copy_results: bool,
    json: bool,
}

impl Session {
    fn new(config: &Config) -> Self {
        let mut engine = CalculatorEngine::new();
        engine.set_max_fraction_digits(config.max_fraction_digits);
        if !config.json {
            engine.set_observer(|text: &str| println!("{text}"));
        }

        Self {
            engine,
            copy_results: config.copy_results,
            json: config.json,
        }
    }

    /// Feed one line of keys into the engine.
    fn handle_line(&mut self, line: &str) -> Result<()> {
        let Some(keystrokes) = parse_keystrokes(line) else {
            tracing::warn!(input = line, "not a calculator key sequence, ignoring");
            return Ok(());
        };

        for keystroke in &keystrokes {
            if let Err(err) = self.engine.press(keystroke) {
                tracing::warn!(?keystroke, %err, "key ignored");
            }
        }

        let snapshot = DisplaySnapshot::from_engine(&self.engine);
        if self.json {
            println!(
                "{}",
                serde_json::to_string(&snapshot).context("Failed to serialize display")?
            );
        }
        if self.copy_results
            && let Some(result) = snapshot.result_for_clipboard()
            && let Err(err) = copy_to_clipboard(result)
        {
            tracing::warn!("{err:#}");
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    config.copy_results |= cli.copy;
    config.json |= cli.json;
    if let Some(precision) = cli.precision {
        config.max_fraction_digits = usize::from(precision);
    }
    tracing::debug!(?config, "starting calculator");

    let mut session = Session::new(&config);

    if let Some(keys) = cli.keys {
        return session.handle_line(&keys);
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            _ => session.handle_line(line)?,
        }
    }

    Ok(())
}
