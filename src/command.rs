//! Command tags, arity and line tokenizing.
//!
//! A command line is a tag followed by space-separated arguments, e.g.
//! `V 2 3 5 R`. Parsing only splits and recognizes the tag; argument
//! contents are checked later by [`crate::validate`].

use crate::error::EditError;

/// Operation named by the first token of a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `I M N`
    CreateImage,
    /// `C`
    Clear,
    /// `L X Y C`
    SetPixel,
    /// `V X Y1 Y2 C`
    DrawVerticalLine,
    /// `H X1 X2 Y C`
    DrawHorizontalLine,
    /// `F X Y C`
    FillRegion,
    /// `S`
    Show,
    /// `X`
    Quit,
}

impl Operation {
    /// All operations in menu order.
    pub const ALL: [Operation; 8] = [
        Operation::CreateImage,
        Operation::Clear,
        Operation::SetPixel,
        Operation::DrawVerticalLine,
        Operation::DrawHorizontalLine,
        Operation::FillRegion,
        Operation::Show,
        Operation::Quit,
    ];

    /// Look up an operation by its single-letter tag (case-sensitive).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "I" => Some(Operation::CreateImage),
            "C" => Some(Operation::Clear),
            "L" => Some(Operation::SetPixel),
            "V" => Some(Operation::DrawVerticalLine),
            "H" => Some(Operation::DrawHorizontalLine),
            "F" => Some(Operation::FillRegion),
            "S" => Some(Operation::Show),
            "X" => Some(Operation::Quit),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Operation::CreateImage => "I",
            Operation::Clear => "C",
            Operation::SetPixel => "L",
            Operation::DrawVerticalLine => "V",
            Operation::DrawHorizontalLine => "H",
            Operation::FillRegion => "F",
            Operation::Show => "S",
            Operation::Quit => "X",
        }
    }

    /// Exact number of arguments the operation takes.
    pub fn arity(self) -> usize {
        match self {
            Operation::CreateImage => 2,
            Operation::SetPixel | Operation::FillRegion => 3,
            Operation::DrawVerticalLine | Operation::DrawHorizontalLine => 4,
            Operation::Clear | Operation::Show | Operation::Quit => 0,
        }
    }

    /// Whether trailing arguments beyond the arity are rejected. Drawing
    /// commands must match exactly; `I`, `C`, `S` and `X` ignore extras.
    pub fn exact_arity(self) -> bool {
        matches!(
            self,
            Operation::SetPixel
                | Operation::DrawVerticalLine
                | Operation::DrawHorizontalLine
                | Operation::FillRegion
        )
    }

    /// Whether the operation can only run once an image exists.
    pub fn requires_grid(self) -> bool {
        !matches!(self, Operation::CreateImage | Operation::Quit)
    }

    /// Usage hint shown after an argument validation failure.
    pub fn usage(self) -> &'static str {
        match self {
            Operation::CreateImage => "I M N where 1 <= M and 1 <= N <= 250",
            Operation::Clear => "C",
            Operation::SetPixel => {
                "L X Y C. Where 1 <= X, 1 <= Y <= 250 and C is a Capital Letter"
            }
            Operation::DrawVerticalLine => {
                "V X Y1 Y2 C. Where 1 <= X, 1 <= Y1 <= Y2 <= 250 and C is a Capital Letter"
            }
            Operation::DrawHorizontalLine => {
                "H X1 X2 Y C. Where 1 <= X1 <= X2, 1 <= Y <= 250 and C is a Capital Letter"
            }
            Operation::FillRegion => {
                "F X Y C. Where 1 <= X, 1 <= Y <= 250 and C is a Capital Letter"
            }
            Operation::Show => "S",
            Operation::Quit => "X",
        }
    }

    /// One-line description used in the interactive menu.
    pub fn description(self) -> &'static str {
        match self {
            Operation::CreateImage => {
                "[I M N]. Create a new M x N image with all pixels coloured white (O)."
            }
            Operation::Clear => "[C]. Clears the table, setting all pixels to white (O).",
            Operation::SetPixel => "[L X Y C]. Colours the pixel (X,Y) with colour C.",
            Operation::DrawVerticalLine => {
                "[V X Y1 Y2 C]. Draw a vertical segment of colour C in column X between rows Y1 and Y2 (inclusive)."
            }
            Operation::DrawHorizontalLine => {
                "[H X1 X2 Y C]. Draw a horizontal segment of colour C in row Y between columns X1 and X2 (inclusive)."
            }
            Operation::FillRegion => {
                "[F X Y C]. Fill the region R with the colour C. R is defined as: Pixel (X,Y) belongs to R. \
                 Any other pixel which is the same colour as (X,Y) and shares a common side with any pixel \
                 in R also belongs to this region."
            }
            Operation::Show => "[S]. Show the contents of the current image",
            Operation::Quit => "[X]. Terminate the session",
        }
    }
}

/// A tokenized command line: an operation plus its raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub op: Operation,
    pub args: Vec<String>,
}

impl Command {
    /// Split a line into tag and arguments.
    ///
    /// Returns `Ok(None)` for blank lines. Unknown tags fail with
    /// [`EditError::UnknownCommand`]; argument count is checked by
    /// [`Command::check_arity`], not here.
    pub fn parse(line: &str) -> Result<Option<Self>, EditError> {
        let mut tokens = line.split_ascii_whitespace();
        let Some(tag) = tokens.next() else {
            return Ok(None);
        };
        let op = Operation::from_tag(tag).ok_or_else(|| EditError::UnknownCommand(tag.to_string()))?;
        let args = tokens.map(str::to_string).collect();
        Ok(Some(Command { op, args }))
    }

    /// Fail with [`EditError::WrongArgumentCount`] when the argument list is
    /// shorter than the operation's arity, or longer for drawing commands.
    pub fn check_arity(&self) -> Result<(), EditError> {
        let expected = self.op.arity();
        let got = self.args.len();
        if got < expected || (got > expected && self.op.exact_arity()) {
            return Err(EditError::WrongArgumentCount {
                op: self.op,
                expected,
                got,
            });
        }
        Ok(())
    }
}

/// Render the interactive command menu.
pub fn menu() -> String {
    let rule = "===========================";
    let mut out = String::new();
    out.push_str(rule);
    out.push_str("\nCommands:\n");
    out.push_str(rule);
    out.push('\n');
    for op in Operation::ALL {
        out.push_str(op.description());
        out.push('\n');
    }
    out.push_str(rule);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_args() {
        let cmd = Command::parse("V 2 3 5 R").unwrap().unwrap();
        assert_eq!(cmd.op, Operation::DrawVerticalLine);
        assert_eq!(cmd.args, vec!["2", "3", "5", "R"]);
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let cmd = Command::parse("  L\t1   2 A \n").unwrap().unwrap();
        assert_eq!(cmd.op, Operation::SetPixel);
        assert_eq!(cmd.args, vec!["1", "2", "A"]);
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   \t").unwrap(), None);
    }

    #[test]
    fn test_parse_unknown_tag() {
        assert_eq!(Command::parse("Q 1 2"), Err(EditError::UnknownCommand("Q".to_string())));
        // Tags are case-sensitive
        assert_eq!(Command::parse("s"), Err(EditError::UnknownCommand("s".to_string())));
    }

    #[test]
    fn test_check_arity() {
        let cmd = Command::parse("L 1 1").unwrap().unwrap();
        assert_eq!(
            cmd.check_arity(),
            Err(EditError::WrongArgumentCount { op: Operation::SetPixel, expected: 3, got: 2 })
        );

        let cmd = Command::parse("L 1 1 A B").unwrap().unwrap();
        assert_eq!(
            cmd.check_arity(),
            Err(EditError::WrongArgumentCount { op: Operation::SetPixel, expected: 3, got: 4 })
        );

        for line in ["S extra", "X now", "C now", "I 2 2 extra"] {
            let cmd = Command::parse(line).unwrap().unwrap();
            assert!(cmd.check_arity().is_ok(), "line: {}", line);
        }

        let cmd = Command::parse("H 1 3 2 Z").unwrap().unwrap();
        assert!(cmd.check_arity().is_ok());
    }

    #[test]
    fn test_tags_roundtrip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_tag(op.tag()), Some(op));
        }
    }

    #[test]
    fn test_requires_grid() {
        assert!(!Operation::CreateImage.requires_grid());
        assert!(!Operation::Quit.requires_grid());
        assert!(Operation::Show.requires_grid());
        assert!(Operation::FillRegion.requires_grid());
    }

    #[test]
    fn test_menu_lists_every_command() {
        let menu = menu();
        for op in Operation::ALL {
            assert!(menu.contains(&format!("[{}", op.tag())), "menu missing {}", op.tag());
        }
    }
}
