//! Command-line entry point: argument parsing, logging and run modes
//!
//! ```bash
//! desk-calc                          # interactive keypad
//! desk-calc --eval "2 * 3 + 4 ="     # prints 10
//! desk-calc --eval "1 / 3 =" --json  # step-by-step transcript
//! ```

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{ArgAction, Parser};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::core::{Accumulator, CalcError};
use crate::driver::record_tokens;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad batch input
    #[error("{0}")]
    Calc(#[from] CalcError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Log subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// Interactive mode requested from a build without the terminal front end
    #[error("Interactive mode not available. Rebuild with --features tui or pass --eval")]
    TuiUnavailable,
}

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "desk-calc",
    version,
    about = "Keypad calculator with exact decimal arithmetic"
)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Whitespace-separated tokens to run without the keypad, e.g. "5 + 3 ="
    #[arg(short, long, value_name = "TOKENS", allow_hyphen_values = true)]
    pub eval: Option<String>,

    /// Print "token -> display" for every token
    #[arg(long, requires = "eval", conflicts_with = "json")]
    pub steps: bool,

    /// Print the run as a JSON transcript
    #[arg(long, requires = "eval")]
    pub json: bool,

    /// Append logs to this file
    #[arg(long, value_name = "PATH", env = "DESK_CALC_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// Every key press
    Verbose,
    /// Everything, including keypad clicks
    Debug,
}

impl Verbosity {
    /// Default `desk_calc` log level for this verbosity
    #[must_use]
    pub const fn level(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "debug",
            Self::Debug => "trace",
        }
    }
}

/// How batch results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Final display only
    Plain,
    /// One line per token
    Steps,
    /// JSON transcript
    Json,
}

impl Cli {
    /// Verbosity from `-q` / `-v` flags
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        match (self.quiet, self.verbose) {
            (true, _) => Verbosity::Quiet,
            (false, 0) => Verbosity::Normal,
            (false, 1) => Verbosity::Verbose,
            (false, _) => Verbosity::Debug,
        }
    }

    /// Batch output format from `--steps` / `--json`
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.steps {
            OutputFormat::Steps
        } else {
            OutputFormat::Plain
        }
    }
}

/// Runs the mode selected by `cli`
pub fn run(cli: &Cli) -> CliResult<()> {
    init_logging(cli.verbosity(), cli.log_file.as_deref(), cli.eval.is_none())?;

    match &cli.eval {
        Some(tokens) => run_batch(tokens, cli.output_format(), &mut io::stdout().lock()),
        None => run_interactive(),
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the verbosity flags. Interactive sessions log only
/// when a file is given, since stderr output would tear the screen.
pub fn init_logging(verbosity: Verbosity, log_file: Option<&Path>, interactive: bool) -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("desk_calc={}", verbosity.level())));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .try_init()
        }
        None if interactive => return Ok(()),
        None => builder.with_writer(io::stderr).try_init(),
    };

    installed.map_err(|e| CliError::Logging(e.to_string()))
}

/// Runs `tokens` through a fresh engine and prints the outcome
pub fn run_batch<W: Write>(tokens: &str, format: OutputFormat, out: &mut W) -> CliResult<()> {
    let mut engine = Accumulator::new();
    let transcript = record_tokens(&mut engine, tokens)?;
    info!(steps = transcript.len(), display = engine.display(), "batch run finished");

    match format {
        OutputFormat::Plain => writeln!(out, "{}", engine.display())?,
        OutputFormat::Steps => {
            for step in &transcript.steps {
                writeln!(out, "{} -> {}", step.token, step.display)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &transcript)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Runs the interactive keypad until the user quits
#[cfg(feature = "tui")]
pub fn run_interactive() -> CliResult<()> {
    use crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{backend::CrosstermBackend, Terminal};

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

#[cfg(feature = "tui")]
fn event_loop<B: ratatui::backend::Backend>(terminal: &mut ratatui::Terminal<B>) -> CliResult<()> {
    use crate::tui::{render, CalculatorApp, InputHandler};

    let mut app = CalculatorApp::new();
    let input = InputHandler::new();
    info!("interactive session started");

    loop {
        terminal.draw(|frame| render(&mut app, frame))?;

        let event = crossterm::event::read()?;
        if app.handle_action(input.handle_event(&event)) {
            break;
        }
    }

    info!(display = app.display(), "interactive session finished");
    Ok(())
}

/// Runs the interactive keypad until the user quits
#[cfg(not(feature = "tui"))]
pub fn run_interactive() -> CliResult<()> {
    Err(CliError::TuiUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("desk-calc").chain(args.iter().copied())).unwrap()
    }

    fn batch(tokens: &str, format: OutputFormat) -> String {
        let mut out = Vec::new();
        run_batch(tokens, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    // ===== Argument parsing =====

    #[test]
    fn test_parse_no_args_is_interactive() {
        let cli = parse(&[]);
        assert!(cli.eval.is_none());
        assert_eq!(cli.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_parse_eval() {
        let cli = parse(&["--eval", "5 + 3 ="]);
        assert_eq!(cli.eval.as_deref(), Some("5 + 3 ="));
        assert_eq!(cli.output_format(), OutputFormat::Plain);
    }

    #[test]
    fn test_parse_eval_leading_minus() {
        let cli = parse(&["-e", "- 3 ="]);
        assert_eq!(cli.eval.as_deref(), Some("- 3 ="));
    }

    #[test]
    fn test_parse_verbosity_levels() {
        assert_eq!(parse(&["-q"]).verbosity(), Verbosity::Quiet);
        assert_eq!(parse(&["-v"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["-vv"]).verbosity(), Verbosity::Debug);
        assert_eq!(parse(&["-vvv"]).verbosity(), Verbosity::Debug);
    }

    #[test]
    fn test_parse_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["desk-calc", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_parse_output_formats() {
        assert_eq!(
            parse(&["-e", "1", "--steps"]).output_format(),
            OutputFormat::Steps
        );
        assert_eq!(
            parse(&["-e", "1", "--json"]).output_format(),
            OutputFormat::Json
        );
    }

    #[test]
    fn test_parse_format_flags_require_eval() {
        assert!(Cli::try_parse_from(["desk-calc", "--json"]).is_err());
        assert!(Cli::try_parse_from(["desk-calc", "--steps"]).is_err());
    }

    #[test]
    fn test_parse_steps_conflicts_with_json() {
        assert!(Cli::try_parse_from(["desk-calc", "-e", "1", "--steps", "--json"]).is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(Verbosity::Quiet.level(), "error");
        assert_eq!(Verbosity::default().level(), "warn");
        assert_eq!(Verbosity::Verbose.level(), "debug");
        assert_eq!(Verbosity::Debug.level(), "trace");
    }

    // ===== Batch mode =====

    #[test]
    fn test_batch_plain() {
        assert_eq!(batch("2 * 3 + 4 =", OutputFormat::Plain), "10\n");
    }

    #[test]
    fn test_batch_plain_empty_input() {
        assert_eq!(batch("", OutputFormat::Plain), "0\n");
    }

    #[test]
    fn test_batch_steps() {
        assert_eq!(batch("7 ± ±", OutputFormat::Steps), "7 -> 7\n± -> -7\n± -> 7\n");
    }

    #[test]
    fn test_batch_json() {
        let out = batch("1 / 0 = 2", OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["steps"][3]["display"], "Error");
        assert_eq!(value["steps"][4]["display"], "2");
    }

    #[test]
    fn test_batch_unknown_token() {
        let mut out = Vec::new();
        let err = run_batch("1 + x", OutputFormat::Plain, &mut out).unwrap_err();
        assert!(matches!(err, CliError::Calc(CalcError::UnknownToken(_))));
        assert!(out.is_empty());
    }

    // ===== Errors =====

    #[test]
    fn test_cli_error_display() {
        let err = CliError::from(CalcError::UnknownToken("x".into()));
        assert_eq!(err.to_string(), "Unknown token: \"x\"");
        assert!(CliError::TuiUnavailable.to_string().contains("--eval"));
    }
}
