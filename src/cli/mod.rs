//! CLI module
//!
//! Handles command-line argument parsing.

pub mod args;

pub use args::{Args, BmiUnits, Commands, Verbosity};
