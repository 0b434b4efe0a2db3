//! Command dispatch against a single editing session.
//!
//! A [`Session`] owns the one mutable image and moves between two states:
//! no image yet, and an image. Each command is checked in a fixed order
//! (arity, image presence, argument rules, bounds) and only then applied,
//! so a rejected command never changes the image.

use tracing::debug;

use crate::command::{Command, Operation};
use crate::draw::DrawOp;
use crate::error::EditError;
use crate::grid::Grid;
use crate::validate::{parse_column, parse_row, valid_arguments};

/// What a successfully applied command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new image was created.
    Created { width: usize, height: usize },
    /// The image was reset to the background color.
    Cleared,
    /// A drawing operation wrote `cells` cells.
    Drawn { cells: usize },
    /// Text rendering of the image, for the caller to display.
    Shown(String),
    /// The session should end.
    Quit,
}

/// Editing session state.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Option<Grid>,
    /// Optional cap on the width accepted by `I`; uncapped by default.
    max_width: Option<usize>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session with no image.
    pub fn new() -> Self {
        Session { grid: None, max_width: None }
    }

    /// Set the largest width `I` will accept. `None` removes the cap.
    pub fn with_max_width(mut self, max_width: Option<usize>) -> Self {
        self.max_width = max_width;
        self
    }

    /// The current image, if one has been created.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn has_grid(&self) -> bool {
        self.grid.is_some()
    }

    /// Tokenize and execute one line. Blank lines yield `Ok(None)`.
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Outcome>, EditError> {
        match Command::parse(line)? {
            Some(command) => self.execute(&command).map(Some),
            None => Ok(None),
        }
    }

    /// Execute a tokenized command.
    pub fn execute(&mut self, command: &Command) -> Result<Outcome, EditError> {
        debug!(op = command.op.tag(), args = ?command.args, "dispatching command");
        command.check_arity()?;

        let op = command.op;
        if op.requires_grid() && self.grid.is_none() {
            return Err(EditError::NoGrid);
        }

        match op {
            Operation::CreateImage => self.create(&command.args),
            Operation::Clear => {
                let grid = self.grid.as_mut().ok_or(EditError::NoGrid)?;
                grid.clear();
                Ok(Outcome::Cleared)
            }
            Operation::Show => {
                let grid = self.grid.as_ref().ok_or(EditError::NoGrid)?;
                Ok(Outcome::Shown(grid.render()))
            }
            Operation::Quit => Ok(Outcome::Quit),
            Operation::SetPixel
            | Operation::DrawVerticalLine
            | Operation::DrawHorizontalLine
            | Operation::FillRegion => {
                let draw = DrawOp::from_args(op, &command.args)?;
                let grid = self.grid.as_mut().ok_or(EditError::NoGrid)?;
                let cells = draw.apply(grid)?;
                Ok(Outcome::Drawn { cells })
            }
        }
    }

    fn create(&mut self, args: &[String]) -> Result<Outcome, EditError> {
        if !valid_arguments(Operation::CreateImage, args) {
            return Err(EditError::InvalidArguments { op: Operation::CreateImage });
        }
        let invalid = || EditError::InvalidArguments { op: Operation::CreateImage };
        let width = parse_column(&args[0]).ok_or_else(invalid)?;
        let height = parse_row(&args[1]).ok_or_else(invalid)?;
        if self.max_width.is_some_and(|max| width > max) {
            return Err(EditError::InvalidDimension { width, height });
        }

        self.grid = Some(Grid::new(width, height)?);
        Ok(Outcome::Created { width, height })
    }
}
