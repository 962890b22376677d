//! Error handling utilities for the CLI.

use std::io::{self, Write};

use growable::ArrayError;
use nu_ansi_term::Color;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, ArrayError>;

/// Write `error: <message>` to `out`, with a red label when `color` is set.
pub fn render_error_to(error: &ArrayError, out: &mut impl Write, color: bool) -> io::Result<()> {
    if color {
        writeln!(out, "{}: {error}", Color::Red.bold().paint("error"))
    } else {
        writeln!(out, "error: {error}")
    }
}

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: ArrayError, no_color: bool) -> ! {
    render_error_to(&error, &mut io::stderr(), !no_color).ok();
    std::process::exit(1);
}
