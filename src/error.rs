//! Error types for editing commands
//!
//! Every variant is recoverable: the front end reports it and the session
//! keeps running. Validation always completes before any mutation, so an
//! `Err` never leaves the grid partially modified.

use thiserror::Error;

use crate::command::Operation;

/// Error produced while dispatching or applying an editing command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// Image dimensions outside `1 <= width <= max`, `1 <= height <= 250`
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    /// Arguments failed the per-operation validation rules
    #[error("invalid arguments for '{}'", op.tag())]
    InvalidArguments { op: Operation },
    /// Argument list length does not match the operation's arity
    #[error("'{}' takes {expected} argument(s), got {got}", op.tag())]
    WrongArgumentCount { op: Operation, expected: usize, got: usize },
    /// Operation needs an image but none has been created yet
    #[error("no image exists yet")]
    NoGrid,
    /// Tag does not name any known operation
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    /// 1-based coordinate lies outside the current image
    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} image")]
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
}
