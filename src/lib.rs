//! Pixelgrid - an editor for images made of single-character pixels
//!
//! This library provides:
//! - A fixed-size grid of uppercase-letter colors with a `'O'` background
//! - Argument validation for the `I C L V H F S X` command set
//! - Point, line and 4-connected region-fill drawing
//! - A session that dispatches commands and renders the image as text

pub mod cli;
pub mod command;
pub mod config;
pub mod draw;
pub mod error;
pub mod fill;
pub mod grid;
pub mod logging;
pub mod session;
pub mod validate;
