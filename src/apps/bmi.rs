//! Body Mass Index calculator
//!
//! Takes weight and height in imperial or metric units and reports the
//! BMI with its WHO weight category.

use std::fmt;
use std::io::Write;

use crate::apps::App;
use crate::console::{Console, LineSource};
use crate::errors::{AppError, Result};

// WHO weight status maxima (kg/m2)
pub const UNDERWEIGHT_MAX: f64 = 18.5;
pub const NORMAL_MAX: f64 = 24.9;
pub const OVERWEIGHT_MAX: f64 = 29.9;
pub const OBESE_I_MAX: f64 = 34.9;
pub const OBESE_III_MIN: f64 = 40.0;

pub const POUNDS_IN_STONE: f64 = 14.0;
pub const INCHES_IN_FOOT: f64 = 12.0;
pub const IMPERIAL_FACTOR: f64 = 703.0;

// Largest accepted value for each measurement; all start at zero
pub const STONES_MAX: f64 = 30.0;
pub const POUNDS_MAX: f64 = 300.0;
pub const FEET_MAX: f64 = 10.0;
pub const INCHES_MAX: f64 = 50.0;
pub const KILOGRAMS_MAX: f64 = 150.0;
pub const CENTIMETRES_MAX: f64 = 300.0;

const RISK_MESSAGE: [&str; 3] = [
    "If you are Black, Asian or in another minority ethnic group, you have a higher health risk.",
    "Adults with a BMI of 23.0 or over are at increased risk.",
    "Adults with a BMI of 27.5 or over are at high risk.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    Imperial,
    Metric,
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Imperial => f.write_str("Imperial"),
            UnitSystem::Metric => f.write_str("Metric"),
        }
    }
}

/// Weight and height as entered by the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurements {
    Imperial {
        stones: f64,
        pounds: f64,
        feet: f64,
        inches: f64,
    },
    Metric {
        kilograms: f64,
        centimetres: f64,
    },
}

impl Measurements {
    pub fn system(&self) -> UnitSystem {
        match self {
            Measurements::Imperial { .. } => UnitSystem::Imperial,
            Measurements::Metric { .. } => UnitSystem::Metric,
        }
    }

    /// Check every value is a finite number within its accepted range
    pub fn validate(&self) -> Result<()> {
        match *self {
            Measurements::Imperial {
                stones,
                pounds,
                feet,
                inches,
            } => {
                check_range("stones", stones, STONES_MAX)?;
                check_range("pounds", pounds, POUNDS_MAX)?;
                check_range("feet", feet, FEET_MAX)?;
                check_range("inches", inches, INCHES_MAX)
            }
            Measurements::Metric {
                kilograms,
                centimetres,
            } => {
                check_range("kilograms", kilograms, KILOGRAMS_MAX)?;
                check_range("centimetres", centimetres, CENTIMETRES_MAX)
            }
        }
    }

    /// Body mass index in kg/m2
    pub fn bmi(&self) -> Result<f64> {
        self.validate()?;

        let bmi = match *self {
            Measurements::Imperial {
                stones,
                pounds,
                feet,
                inches,
            } => {
                let weight_in_pounds = stones * POUNDS_IN_STONE + pounds;
                let height_in_inches = feet * INCHES_IN_FOOT + inches;
                if height_in_inches <= 0.0 {
                    return Err(AppError::InvalidMeasurement(
                        "height must be greater than zero".to_string(),
                    ));
                }
                weight_in_pounds / height_in_inches / height_in_inches * IMPERIAL_FACTOR
            }
            Measurements::Metric {
                kilograms,
                centimetres,
            } => {
                if centimetres <= 0.0 {
                    return Err(AppError::InvalidMeasurement(
                        "height must be greater than zero".to_string(),
                    ));
                }
                kilograms / (centimetres / 100.0).powi(2)
            }
        };

        tracing::debug!(bmi, system = %self.system(), "bmi calculated");
        Ok(bmi)
    }
}

fn check_range(name: &str, value: f64, max: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=max).contains(&value) {
        return Err(AppError::InvalidMeasurement(format!(
            "{} must be a number in the range 0-{}",
            name, max
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WeightCategory {
    Underweight,
    Normal,
    Overweight,
    ObeseI,
    ObeseII,
    ObeseIII,
}

impl WeightCategory {
    /// Category for a BMI; each band runs up to and including its maximum
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_MAX {
            WeightCategory::Underweight
        } else if bmi <= NORMAL_MAX {
            WeightCategory::Normal
        } else if bmi <= OVERWEIGHT_MAX {
            WeightCategory::Overweight
        } else if bmi <= OBESE_I_MAX {
            WeightCategory::ObeseI
        } else if bmi < OBESE_III_MIN {
            WeightCategory::ObeseII
        } else {
            WeightCategory::ObeseIII
        }
    }
}

impl fmt::Display for WeightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WeightCategory::Underweight => "Underweight",
            WeightCategory::Normal => "Normal",
            WeightCategory::Overweight => "Overweight",
            WeightCategory::ObeseI => "Obese Class I",
            WeightCategory::ObeseII => "Obese Class II",
            WeightCategory::ObeseIII => "Obese Class III",
        };
        f.write_str(name)
    }
}

pub fn weight_status(bmi: f64) -> String {
    format!("Your BMI is {:.1}. You are {}.", bmi, WeightCategory::from_bmi(bmi))
}

pub fn risk_message() -> &'static [&'static str] {
    &RISK_MESSAGE
}

#[derive(Debug, Default)]
pub struct BmiCalculator;

impl BmiCalculator {
    pub fn new() -> Self {
        BmiCalculator
    }

    fn select_units<S: LineSource, W: Write>(&self, console: &mut Console<S, W>) -> Result<UnitSystem> {
        console.say("\tWhich unit type would you like to use?")?;
        let choice = console.select_choice(&["Imperial", "Metric"])?;
        Ok(if choice == 1 {
            UnitSystem::Imperial
        } else {
            UnitSystem::Metric
        })
    }

    fn input_measurements<S: LineSource, W: Write>(
        &self,
        console: &mut Console<S, W>,
        system: UnitSystem,
    ) -> Result<Measurements> {
        Ok(match system {
            UnitSystem::Imperial => Measurements::Imperial {
                stones: console.input_number_in_range("\n\tPlease enter your weight in stones > ", 0.0, STONES_MAX)?,
                pounds: console.input_number_in_range("\tPlease enter your weight in pounds > ", 0.0, POUNDS_MAX)?,
                feet: console.input_number_in_range("\n\tPlease enter your height in feet > ", 0.0, FEET_MAX)?,
                inches: console.input_number_in_range("\tPlease enter your height in inches > ", 0.0, INCHES_MAX)?,
            },
            UnitSystem::Metric => Measurements::Metric {
                kilograms: console.input_number_in_range("\n\tPlease enter your weight in kilograms > ", 0.0, KILOGRAMS_MAX)?,
                centimetres: console.input_number_in_range("\n\tPlease enter your height in centimetres > ", 0.0, CENTIMETRES_MAX)?,
            },
        })
    }

    fn calculate_once<S: LineSource, W: Write>(&self, console: &mut Console<S, W>) -> Result<()> {
        let system = self.select_units(console)?;

        let bmi = loop {
            let measurements = self.input_measurements(console, system)?;
            match measurements.bmi() {
                Ok(bmi) => break bmi,
                Err(AppError::InvalidMeasurement(reason)) => {
                    console.show_error(&format!("Invalid measurement: {}. Please try again.", reason))?;
                }
                Err(e) => return Err(e),
            }
        };

        console.blank()?;
        console.show_result(&weight_status(bmi))?;
        console.blank()?;
        for line in risk_message() {
            console.say(format!("\t{}", line))?;
        }
        Ok(())
    }
}

impl App for BmiCalculator {
    fn run<S: LineSource, W: Write>(&mut self, console: &mut Console<S, W>) -> Result<()> {
        console.output_heading("Body Mass Index Calculator")?;

        loop {
            self.calculate_once(console)?;
            if !console.ask_to_repeat()? {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_bmi() {
        let m = Measurements::Metric {
            kilograms: 70.0,
            centimetres: 175.0,
        };
        let bmi = m.bmi().unwrap();
        assert!((bmi - 22.857).abs() < 0.001);
    }

    #[test]
    fn test_imperial_bmi() {
        // 11st 0lb = 154lb, 5ft 9in = 69in
        let m = Measurements::Imperial {
            stones: 11.0,
            pounds: 0.0,
            feet: 5.0,
            inches: 9.0,
        };
        let bmi = m.bmi().unwrap();
        assert!((bmi - 154.0 / 69.0 / 69.0 * 703.0).abs() < 1e-9);
        assert!((bmi - 22.74).abs() < 0.01);
    }

    #[test]
    fn test_zero_height_rejected() {
        let m = Measurements::Metric {
            kilograms: 70.0,
            centimetres: 0.0,
        };
        assert!(matches!(m.bmi(), Err(AppError::InvalidMeasurement(_))));

        let m = Measurements::Imperial {
            stones: 10.0,
            pounds: 0.0,
            feet: 0.0,
            inches: 0.0,
        };
        assert!(m.bmi().is_err());
    }

    #[test]
    fn test_non_finite_values_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let m = Measurements::Metric {
                kilograms: bad,
                centimetres: 175.0,
            };
            assert!(matches!(m.bmi(), Err(AppError::InvalidMeasurement(_))));

            let m = Measurements::Imperial {
                stones: 10.0,
                pounds: 0.0,
                feet: 5.0,
                inches: bad,
            };
            assert!(matches!(m.bmi(), Err(AppError::InvalidMeasurement(_))));
        }
    }

    #[test]
    fn test_negative_values_rejected() {
        let m = Measurements::Metric {
            kilograms: -70.0,
            centimetres: 175.0,
        };
        let err = m.bmi().unwrap_err();
        assert!(err.to_string().contains("kilograms"));

        let m = Measurements::Imperial {
            stones: 10.0,
            pounds: -1.0,
            feet: 5.0,
            inches: 6.0,
        };
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let m = Measurements::Metric {
            kilograms: 900.0,
            centimetres: 175.0,
        };
        let err = m.bmi().unwrap_err();
        assert!(err.to_string().contains("0-150"));

        let m = Measurements::Metric {
            kilograms: 70.0,
            centimetres: 301.0,
        };
        assert!(m.validate().is_err());

        let m = Measurements::Imperial {
            stones: 31.0,
            pounds: 0.0,
            feet: 5.0,
            inches: 6.0,
        };
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_range_limits_accepted() {
        let m = Measurements::Imperial {
            stones: STONES_MAX,
            pounds: POUNDS_MAX,
            feet: FEET_MAX,
            inches: INCHES_MAX,
        };
        assert!(m.validate().is_ok());

        let m = Measurements::Metric {
            kilograms: 0.0,
            centimetres: CENTIMETRES_MAX,
        };
        assert_eq!(m.bmi().unwrap(), 0.0);
    }

    #[test]
    fn test_category_boundaries() {
        use WeightCategory::*;

        assert_eq!(WeightCategory::from_bmi(18.4), Underweight);
        assert_eq!(WeightCategory::from_bmi(18.5), Normal);
        assert_eq!(WeightCategory::from_bmi(24.9), Normal);
        assert_eq!(WeightCategory::from_bmi(24.95), Overweight);
        assert_eq!(WeightCategory::from_bmi(29.9), Overweight);
        assert_eq!(WeightCategory::from_bmi(30.0), ObeseI);
        assert_eq!(WeightCategory::from_bmi(34.9), ObeseI);
        assert_eq!(WeightCategory::from_bmi(35.0), ObeseII);
        assert_eq!(WeightCategory::from_bmi(39.99), ObeseII);
        assert_eq!(WeightCategory::from_bmi(40.0), ObeseIII);
        assert_eq!(WeightCategory::from_bmi(55.0), ObeseIII);
    }

    #[test]
    fn test_weight_status_message() {
        assert_eq!(weight_status(22.857), "Your BMI is 22.9. You are Normal.");
        assert_eq!(weight_status(41.0), "Your BMI is 41.0. You are Obese Class III.");
        assert_eq!(weight_status(36.0), "Your BMI is 36.0. You are Obese Class II.");
    }

    #[test]
    fn test_risk_message_thresholds() {
        let text = risk_message().join(" ");
        assert!(text.contains("23.0"));
        assert!(text.contains("27.5"));
    }
}
