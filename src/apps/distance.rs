//! Distance converter
//!
//! Converts a distance between miles, feet and metres.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::apps::App;
use crate::console::{Console, LineSource};
use crate::errors::{AppError, Result};

pub const FEET_IN_MILES: f64 = 5280.0;
pub const FEET_IN_METRES: f64 = 3.28084;
pub const METRES_IN_MILES: f64 = 1609.34;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    Miles,
    Feet,
    Metres,
}

impl DistanceUnit {
    pub const ALL: [DistanceUnit; 3] = [DistanceUnit::Miles, DistanceUnit::Feet, DistanceUnit::Metres];

    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Miles => "Miles",
            DistanceUnit::Feet => "Feet",
            DistanceUnit::Metres => "Metres",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "miles" | "mile" | "mi" => Ok(DistanceUnit::Miles),
            "feet" | "foot" | "ft" => Ok(DistanceUnit::Feet),
            "metres" | "metre" | "meters" | "meter" | "m" => Ok(DistanceUnit::Metres),
            _ => Err(AppError::UnknownUnit(s.to_string())),
        }
    }
}

/// A distance must be a finite, non-negative number
pub fn validate_distance(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(AppError::InvalidMeasurement(
            "The distance must be a finite number.".to_string(),
        ));
    }
    if value < 0.0 {
        return Err(AppError::InvalidMeasurement(
            "The distance cannot be negative.".to_string(),
        ));
    }
    Ok(value)
}

/// Convert `value` from one unit to another
pub fn convert(value: f64, from: DistanceUnit, to: DistanceUnit) -> Result<f64> {
    use DistanceUnit::*;

    let value = validate_distance(value)?;

    let converted = match (from, to) {
        (Miles, Feet) => value * FEET_IN_MILES,
        (Feet, Miles) => value / FEET_IN_MILES,
        (Miles, Metres) => value * METRES_IN_MILES,
        (Metres, Miles) => value / METRES_IN_MILES,
        (Metres, Feet) => value * FEET_IN_METRES,
        (Feet, Metres) => value / FEET_IN_METRES,
        (unit, _) => {
            return Err(AppError::SameUnit {
                unit: unit.to_string(),
            })
        }
    };

    tracing::debug!(value, %from, %to, converted, "distance converted");
    Ok(converted)
}

/// One line summary, e.g. `3 Miles = 15840.00 Feet`
pub fn format_conversion(value: f64, from: DistanceUnit, converted: f64, to: DistanceUnit) -> String {
    format!("{} {} = {:.2} {}", value, from, converted, to)
}

/// Interactive converter
#[derive(Debug, Default)]
pub struct DistanceConverter;

impl DistanceConverter {
    pub fn new() -> Self {
        DistanceConverter
    }

    fn select_unit<S: LineSource, W: Write>(
        &self,
        console: &mut Console<S, W>,
        prompt: &str,
    ) -> Result<DistanceUnit> {
        console.say(format!("\t{}", prompt))?;
        let labels: Vec<&str> = DistanceUnit::ALL.iter().map(|u| u.as_str()).collect();
        let choice = console.select_choice(&labels)?;
        let unit = DistanceUnit::ALL[choice - 1];
        console.say(format!("\t{} has been selected.\n", unit))?;
        Ok(unit)
    }

    fn convert_once<S: LineSource, W: Write>(&self, console: &mut Console<S, W>) -> Result<()> {
        let from = self.select_unit(console, "From Unit")?;
        let mut to = self.select_unit(console, "To Unit")?;

        while to == from {
            console.show_error("The To unit cannot be the same as the From unit. Please try again.\n")?;
            to = self.select_unit(console, "To Unit")?;
        }

        console.say(format!("\t{} -> {} Conversion", from, to))?;
        let prompt = format!("\tPlease enter the number of {} > ", from);
        let value = loop {
            match validate_distance(console.input_number(&prompt)?) {
                Ok(value) => break value,
                Err(AppError::InvalidMeasurement(reason)) => console.show_error(&reason)?,
                Err(e) => return Err(e),
            }
        };

        let converted = convert(value, from, to)?;
        console.show_result(&format_conversion(value, from, converted, to))
    }
}

impl App for DistanceConverter {
    fn run<S: LineSource, W: Write>(&mut self, console: &mut Console<S, W>) -> Result<()> {
        console.output_heading("Distance Conversion Calculator")?;

        loop {
            self.convert_once(console)?;
            if !console.ask_to_repeat()? {
                return Ok(());
            }
        }
    }
}
