//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to the
//! interactive REPL or the batch script runner.

mod repl;
mod script;

use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::command::Operation;
use crate::config::{load_config, merge_cli_overrides, CliOverrides, LOG_LEVELS};
use crate::error::EditError;
use crate::logging::init_tracing;

pub use repl::run_repl;
pub use script::{execute_script, ScriptReport};

/// Process exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Pixelgrid - edit a grid of single-character pixels
#[derive(Parser)]
#[command(name = "pxg")]
#[command(about = "Pixelgrid - interactive single-character raster editor")]
#[command(version)]
pub struct Cli {
    /// Path to a pxg.toml config file (default: discovered)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level filter (overridden by PXG_LOG)
    #[arg(long, global = true, ignore_case = true, value_parser = PossibleValuesParser::new(LOG_LEVELS))]
    pub log_level: Option<String>,

    /// Do not print the command menu before each prompt
    #[arg(long, global = true)]
    pub no_menu: bool,

    /// Largest image width accepted by `I`
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_width: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session (default)
    Repl,
    /// Execute commands from a script file, one per line
    Run {
        /// Script file, or `-` for stdin
        script: PathBuf,

        /// Stop at the first rejected command and exit with an error
        #[arg(long)]
        strict: bool,
    },
}

/// Human-readable report for a rejected command, with a usage hint where
/// one helps.
pub fn describe_error(err: &EditError) -> String {
    match err {
        EditError::InvalidArguments { op } if *op == Operation::CreateImage => {
            format!("Invalid range of values, please select another range.\n{}", op.usage())
        }
        EditError::InvalidArguments { op } => {
            format!("Invalid arguments provided.\n{}", op.usage())
        }
        EditError::InvalidDimension { .. } => {
            format!("Invalid range of values: {}", err)
        }
        EditError::WrongArgumentCount { op, .. } => {
            format!("Incorrect number of arguments provided: {}\n{}", err, op.usage())
        }
        EditError::NoGrid => "You need to create an image first!\n\
             Try creating one using the command I 5 6 for example..."
            .to_string(),
        EditError::UnknownCommand(_) => format!("Please give a valid command ({})", err),
        EditError::OutOfBounds { .. } => format!("Error: {}", err),
    }
}

/// Read one line into `buf` and decode it, replacing invalid UTF-8 so a
/// bad line is rejected like any other command. `None` at end of input.
pub(crate) fn read_line_lossy<R: BufRead>(
    input: &mut R,
    buf: &mut Vec<u8>,
) -> io::Result<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Run the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    let overrides = CliOverrides {
        no_menu: cli.no_menu,
        max_width: cli.max_width.map(|w| usize::try_from(w).unwrap_or(usize::MAX)),
        log_level: cli.log_level.clone(),
    };
    merge_cli_overrides(&mut config, &overrides);
    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("Error: {}", e);
        }
        return ExitCode::from(EXIT_INVALID_ARGS);
    }
    init_tracing(&config.logging.level);

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            match run_repl(stdin.lock(), stdout.lock(), &config.session) {
                Ok(()) => ExitCode::from(EXIT_SUCCESS),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
        Commands::Run { script, strict } => script::run_script(&script, strict, &config.session),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_default_is_repl() {
        let cli = Cli::try_parse_from(["pxg"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_menu);
    }

    #[test]
    fn test_parse_run_with_globals() {
        let cli =
            Cli::try_parse_from(["pxg", "run", "art.txt", "--strict", "--max-width", "64"]).unwrap();
        assert_eq!(cli.max_width, Some(64));
        match cli.command {
            Some(Commands::Run { script, strict }) => {
                assert_eq!(script, PathBuf::from("art.txt"));
                assert!(strict);
            }
            _ => panic!("Expected run subcommand"),
        }
    }

    #[test]
    fn test_parse_rejects_zero_width() {
        assert!(Cli::try_parse_from(["pxg", "--max-width", "0"]).is_err());
    }

    #[test]
    fn test_parse_log_level_restricted() {
        assert!(Cli::try_parse_from(["pxg", "--log-level", "loud"]).is_err());

        let cli = Cli::try_parse_from(["pxg", "--log-level", "DEBUG"]).unwrap();
        assert!(cli.log_level.is_some_and(|l| l.eq_ignore_ascii_case("debug")));
    }

    #[test]
    fn test_read_line_lossy() {
        let mut input = io::Cursor::new(&b"L 1 1 \xff\nS"[..]);
        let mut buf = Vec::new();
        assert_eq!(
            read_line_lossy(&mut input, &mut buf).unwrap().as_deref(),
            Some("L 1 1 \u{FFFD}\n")
        );
        assert_eq!(read_line_lossy(&mut input, &mut buf).unwrap().as_deref(), Some("S"));
        assert_eq!(read_line_lossy(&mut input, &mut buf).unwrap(), None);
    }

    #[test]
    fn test_describe_invalid_arguments_includes_usage() {
        let text = describe_error(&EditError::InvalidArguments { op: Operation::DrawVerticalLine });
        assert!(text.starts_with("Invalid arguments provided."));
        assert!(text.contains("1 <= Y1 <= Y2 <= 250"));

        let text = describe_error(&EditError::InvalidArguments { op: Operation::CreateImage });
        assert!(text.starts_with("Invalid range of values"));
    }

    #[test]
    fn test_describe_no_grid_suggests_create() {
        assert!(describe_error(&EditError::NoGrid).contains("I 5 6"));
    }
}
