//! The coursework apps
//!
//! Each app drives a [`Console`] until the user leaves it, then returns
//! control to the caller (the launcher menu or `main`).

pub mod bmi;
pub mod distance;
pub mod grades;
pub mod rps;
pub mod social;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::config::Config;
use crate::console::{Console, LineSource};
use crate::errors::{AppError, Result};

pub use bmi::BmiCalculator;
pub use distance::DistanceConverter;
pub use grades::StudentGrades;
pub use rps::Game;
pub use social::SocialNetwork;

/// An interactive console app
pub trait App {
    /// Run until the user chooses to leave
    fn run<S: LineSource, W: Write>(&mut self, console: &mut Console<S, W>) -> Result<()>;
}

/// Selectable apps, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppKind {
    Distance,
    Bmi,
    Grades,
    Social,
    Rps,
}

impl AppKind {
    pub const ALL: [AppKind; 5] = [
        AppKind::Distance,
        AppKind::Bmi,
        AppKind::Grades,
        AppKind::Social,
        AppKind::Rps,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AppKind::Distance => "Distance Converter",
            AppKind::Bmi => "BMI Calculator",
            AppKind::Grades => "Student Marks",
            AppKind::Social => "Social Network",
            AppKind::Rps => "Rock Paper Scissors",
        }
    }

    /// Build a fresh app instance and run it
    pub fn launch<S: LineSource, W: Write>(&self, config: &Config, console: &mut Console<S, W>) -> Result<()> {
        tracing::info!(app = self.label(), "starting app");

        match self {
            AppKind::Distance => DistanceConverter::new().run(console),
            AppKind::Bmi => BmiCalculator::new().run(console),
            AppKind::Grades => StudentGrades::new(config.grades.students.clone()).run(console),
            AppKind::Social => SocialNetwork::new().run(console),
            AppKind::Rps => Game::new(config.rps.rounds).run(console),
        }
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AppKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "distance" | "convert" | "app01" => Ok(AppKind::Distance),
            "bmi" | "app02" => Ok(AppKind::Bmi),
            "grades" | "marks" | "app03" => Ok(AppKind::Grades),
            "social" | "feed" | "app04" => Ok(AppKind::Social),
            "rps" | "game" | "app06" => Ok(AppKind::Rps),
            other => Err(AppError::ConfigError(format!("Unknown app: {}", other))),
        }
    }
}
