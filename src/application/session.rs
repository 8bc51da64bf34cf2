//! Interactive calculator session
//!
//! Runs the whole dialogue: greet, read three sides, check they form a
//! triangle, read the display precision, print the report.

use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::entities::{
    parse_side_length, DecimalPlaces, DerivedMetrics, Side, Triangle, MAX_DECIMAL_PLACES,
    MAX_SIDE_LENGTH, MIN_DECIMAL_PLACES, MIN_SIDE_LENGTH,
};
use crate::domain::format::format_number;
use crate::domain::DomainError;
use crate::infrastructure::traits::Console;

/// Greeting printed once at session start.
pub const WELCOME_MESSAGE: &str = "Welcome to the Triangle Properties Calculator App!";

const INVALID_NUMBER_MESSAGE: &str =
    "Invalid input! Please enter a valid number without extra characters.";

/// Service running one complete calculator session.
///
/// Malformed or out-of-range input is reported and re-prompted
/// indefinitely. A degenerate triangle ends the run instead: the three
/// sides were accepted individually, so there is no single value to ask
/// for again.
pub struct SessionService {
    console: Arc<dyn Console>,
}

impl SessionService {
    /// Create a new session service.
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }

    /// Run the dialogue from greeting to report.
    pub fn run(&self) -> ApplicationResult<()> {
        debug!("run: session started");
        self.say(WELCOME_MESSAGE)?;
        self.say("")?;

        let a = self.read_side(Side::A)?;
        let b = self.read_side(Side::B)?;
        let c = self.read_side(Side::C)?;
        let triangle = Triangle::new(a, b, c)?;

        let places = self.read_decimal_places()?;
        let metrics = DerivedMetrics::compute(&triangle);
        self.print_report(&metrics, places)?;
        debug!("run: session finished");
        Ok(())
    }

    /// Prompt for one side length until a valid value arrives.
    fn read_side(&self, side: Side) -> ApplicationResult<f64> {
        loop {
            let line = self.ask(&format!(
                "Enter the length of side '{}' (from {} to {}): ",
                side.label(),
                MIN_SIDE_LENGTH,
                MAX_SIDE_LENGTH
            ))?;
            match parse_side_length(&line) {
                Ok(value) => {
                    debug!("read_side: {}={}", side.label(), value);
                    return Ok(value);
                }
                Err(DomainError::MalformedNumber { .. }) => {
                    self.say(INVALID_NUMBER_MESSAGE)?;
                }
                Err(DomainError::SideOutOfRange { .. }) => {
                    self.say(&format!(
                        "Side cannot be less than {} and cannot be greater than {}!",
                        MIN_SIDE_LENGTH, MAX_SIDE_LENGTH
                    ))?;
                }
                Err(other) => return Err(other.into()),
            }
        }
    }

    /// Prompt for the decimal-place count until a valid value arrives.
    fn read_decimal_places(&self) -> ApplicationResult<DecimalPlaces> {
        loop {
            let line = self.ask(&format!(
                "Enter the number of decimal places (from {} to {}): ",
                MIN_DECIMAL_PLACES, MAX_DECIMAL_PLACES
            ))?;
            match DecimalPlaces::parse(&line) {
                Ok(places) => {
                    debug!("read_decimal_places: {}", places.count());
                    return Ok(places);
                }
                Err(DomainError::MalformedNumber { .. }) => {
                    self.say(INVALID_NUMBER_MESSAGE)?;
                }
                Err(DomainError::DecimalPlacesOutOfRange { .. }) => {
                    self.say(&format!(
                        "Decimal places must be between {} and {}.",
                        MIN_DECIMAL_PLACES, MAX_DECIMAL_PLACES
                    ))?;
                }
                Err(other) => return Err(other.into()),
            }
        }
    }

    /// Print every metric at the requested precision.
    fn print_report(
        &self,
        metrics: &DerivedMetrics,
        places: DecimalPlaces,
    ) -> ApplicationResult<()> {
        debug!("print_report: places={}", places.count());
        self.say("")?;
        self.say(&format!(
            "Perimeter: {}",
            format_number(metrics.perimeter(), places)
        ))?;
        self.say(&format!("Area: {}", format_number(metrics.area(), places)))?;

        for side in Side::ALL {
            self.say(&format!(
                "Height to side '{}': {}",
                side.label(),
                format_number(metrics.height(side), places)
            ))?;
        }
        for side in Side::ALL {
            self.say(&format!(
                "Median to side '{}': {}",
                side.label(),
                format_number(metrics.median(side), places)
            ))?;
        }
        for side in Side::ALL {
            self.say(&format!(
                "Bisector to side '{}': {}",
                side.label(),
                format_number(metrics.bisector(side), places)
            ))?;
        }
        Ok(())
    }

    /// Write a prompt, then read the answering line.
    /// Exhausted input is a terminal failure, not a retry.
    fn ask(&self, prompt: &str) -> ApplicationResult<String> {
        self.console
            .write(prompt)
            .map_err(|e| ApplicationError::Io {
                context: format!("write prompt {:?}", prompt),
                source: e,
            })?;
        let line = self
            .console
            .read_line()
            .map_err(|e| ApplicationError::Io {
                context: "read input line".to_string(),
                source: e,
            })?;
        match line {
            Some(line) => Ok(line),
            None => Err(ApplicationError::InputClosed),
        }
    }

    /// Write one full output line.
    fn say(&self, text: &str) -> ApplicationResult<()> {
        self.console
            .write_line(text)
            .map_err(|e| ApplicationError::Io {
                context: format!("write line {:?}", text),
                source: e,
            })
    }
}
