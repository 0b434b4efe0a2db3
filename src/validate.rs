//! Argument validation for editing commands.
//!
//! These are pure functions over the raw argument strings. They never look
//! at the current image, so bounds against an existing grid are checked
//! separately by the session.

use crate::command::Operation;
use crate::grid::MAX_ROWS;

/// Parse a column number: an integer `>= 1`.
pub fn parse_column(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|&n| n >= 1)
}

/// Parse a row number: an integer in `[1, 250]`.
pub fn parse_row(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|&n| n >= 1 && n <= MAX_ROWS)
}

/// Parse a color: exactly one uppercase ASCII letter.
pub fn parse_color(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => Some(c),
        _ => None,
    }
}

pub fn valid_column(s: &str) -> bool {
    parse_column(s).is_some()
}

pub fn valid_row(s: &str) -> bool {
    parse_row(s).is_some()
}

pub fn valid_color(s: &str) -> bool {
    parse_color(s).is_some()
}

/// Check an operation's arguments against its per-argument rules.
///
/// Missing arguments make the result `false`; this never panics. Range
/// pairs (`Y1 <= Y2` for `V`, `X1 <= X2` for `H`) are compared as numbers.
/// Operations without arguments accept any list; their arity is checked by
/// [`crate::command::Command::check_arity`].
pub fn valid_arguments(op: Operation, args: &[String]) -> bool {
    let arg = |i: usize| args.get(i).map(String::as_str).unwrap_or("");

    match op {
        Operation::CreateImage => valid_column(arg(0)) && valid_row(arg(1)),
        Operation::SetPixel | Operation::FillRegion => {
            valid_column(arg(0)) && valid_row(arg(1)) && valid_color(arg(2))
        }
        Operation::DrawVerticalLine => {
            match (parse_column(arg(0)), parse_row(arg(1)), parse_row(arg(2)), parse_color(arg(3))) {
                (Some(_), Some(y1), Some(y2), Some(_)) => y1 <= y2,
                _ => false,
            }
        }
        Operation::DrawHorizontalLine => {
            match (parse_column(arg(0)), parse_column(arg(1)), parse_row(arg(2)), parse_color(arg(3)))
            {
                (Some(x1), Some(x2), Some(_), Some(_)) => x1 <= x2,
                _ => false,
            }
        }
        Operation::Clear | Operation::Show | Operation::Quit => true,
    }
}
