use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use keycalc::calculator::{copy_to_clipboard, looks_like_key_sequence};
use keycalc::config::{Config, OutputFormat};
use keycalc::session::{Session, Snapshot};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// A four-function keypad calculator.
///
/// Keys are typed as their keypad labels (0-9 . AC +/- % + - × ÷ =) or
/// ASCII aliases (* / x c). Keys may be separated by spaces or glued
/// together, e.g. `12+3=`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Keys to press. Without keys, reads lines from stdin.
    #[arg(allow_hyphen_values = true)]
    keys: Vec<String>,

    /// Path to the config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format, overriding the config file.
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,

    /// Copy the final display to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Log engine transitions to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    let output = cli.output.unwrap_or(config.output);
    let mut session = Session::new(config.key_parser()?);

    if !cli.keys.is_empty() {
        let snapshot = session.feed_line(&cli.keys.join(" "))?;
        print_snapshot(&snapshot, output)?;
        if cli.copy {
            copy_to_clipboard(snapshot.text_for_clipboard())?;
        }
        return Ok(());
    }

    run_interactive(&mut session, &config, output)?;

    if cli.copy {
        copy_to_clipboard(session.snapshot().text_for_clipboard())?;
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "keycalc=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Read lines from stdin and print the display after each one.
fn run_interactive(session: &mut Session, config: &Config, output: OutputFormat) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    if interactive {
        print_snapshot(&session.snapshot(), output)?;
    }

    loop {
        if interactive {
            print!("{}", config.prompt);
            io::stdout().flush().context("Failed to flush stdout")?;
        }

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            break;
        }

        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            "reset" => {
                session.reset();
                print_snapshot(&session.snapshot(), output)?;
                continue;
            }
            _ => {}
        }

        match session.feed_line(line) {
            Ok(snapshot) => {
                print_snapshot(&snapshot, output)?;
                if config.copy_on_evaluate
                    && line.ends_with('=')
                    && let Err(e) = copy_to_clipboard(snapshot.text_for_clipboard())
                {
                    warn!("{}", e);
                }
            }
            Err(e) if !looks_like_key_sequence(line) => {
                eprintln!("{} (type 'quit' to exit)", e)
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    Ok(())
}

fn print_snapshot(snapshot: &Snapshot, output: OutputFormat) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match output {
        OutputFormat::Plain => writeln!(stdout, "{}", snapshot.display)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut stdout, snapshot).context("Failed to write snapshot")?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
