//! Celsius temperature with an absolute-zero lower bound

use crate::error::OutOfRangeError;
use std::fmt;

/// Lowest representable temperature, in degrees Celsius.
pub const ABSOLUTE_ZERO: f64 = -273.15;

/// A temperature in degrees Celsius that never drops below [`ABSOLUTE_ZERO`].
///
/// The value can only change through [`Celsius::set_temperature`], which
/// validates before storing, so a rejected update leaves the old value in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Celsius {
    temperature: f64,
}

impl Celsius {
    /// Create a temperature, going through the same check as the setter.
    pub fn new(temperature: f64) -> Result<Self, OutOfRangeError> {
        let mut celsius = Self::default();
        celsius.set_temperature(temperature)?;
        Ok(celsius)
    }

    pub fn temperature(&self) -> f64 {
        tracing::info!("Getting value...");
        self.temperature
    }

    /// Replace the stored temperature.
    ///
    /// NaN is rejected along with anything below absolute zero.
    pub fn set_temperature(&mut self, value: f64) -> Result<(), OutOfRangeError> {
        tracing::info!("Setting value...");
        if value.is_nan() || value < ABSOLUTE_ZERO {
            tracing::debug!(value, "rejected temperature below absolute zero");
            return Err(OutOfRangeError { value });
        }
        self.temperature = value;
        Ok(())
    }

    pub fn to_fahrenheit(&self) -> f64 {
        self.temperature * 1.8 + 32.0
    }
}

impl TryFrom<f64> for Celsius {
    type Error = OutOfRangeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} °C", self.temperature)
    }
}
