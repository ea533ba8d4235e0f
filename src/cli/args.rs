//! Command-line argument parsing
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::apps::bmi::Measurements;
use crate::apps::distance::DistanceUnit;
use crate::apps::AppKind;

/// Console coursework apps: distance converter, BMI calculator, student
/// marks, social network and rock/paper/scissors
#[derive(Parser, Debug)]
#[command(name = "coursework")]
#[command(version)]
#[command(about = "Console coursework applications", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only on stderr)
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Subcommand (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu of all apps
    Menu,

    /// Start one app directly (distance, bmi, grades, social, rps)
    Run {
        #[arg(value_name = "APP")]
        app: AppKind,
    },

    /// Convert a distance and print the result
    Convert {
        value: f64,
        /// miles, feet or metres
        from: DistanceUnit,
        /// miles, feet or metres
        to: DistanceUnit,
    },

    /// Calculate a BMI and print the weight status
    Bmi {
        #[command(subcommand)]
        units: BmiUnits,
    },

    /// Display current configuration
    Config,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq)]
pub enum BmiUnits {
    /// Weight in kilograms, height in centimetres
    Metric { kilograms: f64, centimetres: f64 },
    /// Weight in stones and pounds, height in feet and inches
    Imperial {
        stones: f64,
        pounds: f64,
        feet: f64,
        inches: f64,
    },
}

impl From<BmiUnits> for Measurements {
    fn from(units: BmiUnits) -> Self {
        match units {
            BmiUnits::Metric {
                kilograms,
                centimetres,
            } => Measurements::Metric {
                kilograms,
                centimetres,
            },
            BmiUnits::Imperial {
                stones,
                pounds,
                feet,
                inches,
            } => Measurements::Imperial {
                stones,
                pounds,
                feet,
                inches,
            },
        }
    }
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

impl Verbosity {
    /// Log level for the stderr subscriber
    pub fn level(&self) -> tracing::Level {
        match self {
            Verbosity::Quiet => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::WARN,
            Verbosity::Verbose => tracing::Level::INFO,
            Verbosity::VeryVerbose => tracing::Level::DEBUG,
        }
    }
}
