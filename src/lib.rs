//! Coursework console applications
//!
//! A bundle of small menu-driven console apps sharing one input helper:
//!
//! - **Distance converter**: miles, feet and metres
//! - **BMI calculator**: imperial or metric, WHO weight categories
//! - **Student marks**: grades, mean/min/max and grade profile
//! - **Social network**: in-memory news feed with likes and comments
//! - **Rock paper scissors**: best-of-N against the computer

pub mod errors;
pub use errors::{AppError, Result};

pub mod config;
pub use config::Config;

// Shared read-validate-loop prompts
pub mod console;
pub use console::Console;

pub mod apps;
pub mod cli;
pub mod launcher;
