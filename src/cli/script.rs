//! Batch execution of command scripts (`pxg run`).

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::process::ExitCode;

use tracing::warn;

use crate::config::SessionConfig;
use crate::session::{Outcome, Session};

use super::{describe_error, read_line_lossy, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Summary of a script run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScriptReport {
    /// Commands applied successfully
    pub applied: usize,
    /// Commands rejected
    pub rejected: usize,
    /// Whether the script ended with `X`
    pub quit: bool,
}

/// Execute every command in `input`.
///
/// Blank lines and lines starting with `#` are skipped. Renderings go to
/// `out`; rejected commands are reported to `err` as `line N: ...`. In
/// strict mode the first rejection stops the run.
pub fn execute_script<R: BufRead, W: Write, E: Write>(
    mut input: R,
    mut out: W,
    mut err: E,
    config: &SessionConfig,
    strict: bool,
) -> io::Result<ScriptReport> {
    let mut session = Session::new().with_max_width(config.max_width);
    let mut report = ScriptReport::default();
    let mut buf = Vec::new();
    let mut line_no = 0;

    while let Some(line) = read_line_lossy(&mut input, &mut buf)? {
        line_no += 1;
        if line.trim_start().starts_with('#') {
            continue;
        }

        match session.execute_line(&line) {
            Ok(None) => {}
            Ok(Some(outcome)) => {
                report.applied += 1;
                match outcome {
                    Outcome::Shown(text) => writeln!(out, "{}", text)?,
                    Outcome::Quit => {
                        report.quit = true;
                        break;
                    }
                    _ => {}
                }
            }
            Err(e) => {
                report.rejected += 1;
                warn!(line = line_no, error = %e, "command rejected");
                for (i, msg) in describe_error(&e).lines().enumerate() {
                    if i == 0 {
                        writeln!(err, "line {}: {}", line_no, msg)?;
                    } else {
                        writeln!(err, "  {}", msg)?;
                    }
                }
                if strict {
                    break;
                }
            }
        }
    }

    out.flush()?;
    Ok(report)
}

/// Execute the run command
pub fn run_script(path: &Path, strict: bool, config: &SessionConfig) -> ExitCode {
    let reader: Box<dyn BufRead> = if path == Path::new("-") {
        Box::new(BufReader::new(io::stdin()))
    } else {
        match File::open(path) {
            Ok(f) => Box::new(BufReader::new(f)),
            Err(e) => {
                eprintln!("Error: Cannot open script '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        }
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    match execute_script(reader, stdout.lock(), stderr.lock(), config, strict) {
        Ok(report) if strict && report.rejected > 0 => ExitCode::from(EXIT_ERROR),
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
