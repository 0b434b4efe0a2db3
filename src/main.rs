//! Pixelgrid - command-line editor for single-character raster images

use std::process::ExitCode;

use pixelgrid::cli;

fn main() -> ExitCode {
    cli::run()
}
