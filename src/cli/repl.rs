//! Interactive session loop.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::command::menu;
use crate::config::SessionConfig;
use crate::session::{Outcome, Session};

use super::{describe_error, read_line_lossy};

/// Read commands from `input` until `X` or end of input, writing menus,
/// prompts, renderings and error reports to `output`.
pub fn run_repl<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &SessionConfig,
) -> io::Result<()> {
    let mut session = Session::new().with_max_width(config.max_width);
    let mut buf = Vec::new();

    loop {
        if config.show_menu {
            writeln!(output)?;
            write!(output, "{}", menu())?;
            writeln!(output)?;
        }
        writeln!(output, "{}", config.prompt)?;
        output.flush()?;

        let Some(line) = read_line_lossy(&mut input, &mut buf)? else {
            info!("end of input, closing session");
            break;
        };

        match session.execute_line(&line) {
            Ok(Some(Outcome::Shown(text))) => writeln!(output, "{}", text)?,
            Ok(Some(Outcome::Quit)) => break,
            Ok(_) => {}
            Err(e) => writeln!(output, "{}", describe_error(&e))?,
        }
    }

    output.flush()
}
