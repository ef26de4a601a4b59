use serde::{Deserialize, Serialize};
use std::fmt;

pub const MM_PER_INCH: f64 = 25.4;
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Units the distance label can be shown in, in cycling order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Pixels,
    Inches,
    Feet,
    Millimeters,
    Centimeters,
    Meters,
}

impl Unit {
    pub const ALL: [Unit; 6] = [
        Unit::Pixels,
        Unit::Inches,
        Unit::Feet,
        Unit::Millimeters,
        Unit::Centimeters,
        Unit::Meters,
    ];

    /// Anything outside the known range shows raw pixels.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Unit::Pixels)
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|u| *u == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::ALL.len())
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Pixels => "pixels",
            Unit::Inches => "inches",
            Unit::Feet => "feet",
            Unit::Millimeters => "mm",
            Unit::Centimeters => "cm",
            Unit::Meters => "meters",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// Rounds half away from zero to `places` decimals.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

pub fn feet_to_inches(feet: f64) -> f64 {
    feet * INCHES_PER_FOOT
}

pub fn inches_to_feet(inches: f64) -> f64 {
    inches / INCHES_PER_FOOT
}

/// Pixel-to-unit ratios for one field image. Both ratios are positive.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pixels_per_inch: f64,
    pixels_per_mm: f64,
    precision: u32,
}

impl Calibration {
    pub fn new(pixels_per_inch: f64, precision: u32) -> Self {
        Self {
            pixels_per_inch,
            pixels_per_mm: pixels_per_inch / MM_PER_INCH,
            precision,
        }
    }

    pub fn pixels_per_inch(&self) -> f64 {
        self.pixels_per_inch
    }

    pub fn pixels_per_mm(&self) -> f64 {
        self.pixels_per_mm
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Rounded value of a pixel distance in `unit`.
    ///
    /// Feet are derived from the rounded inch value, centimeters and meters
    /// from the rounded millimeter value.
    pub fn convert(&self, pixels: f64, unit: Unit) -> f64 {
        let r = |v: f64| round_to(v, self.precision);
        let inches = r(pixels / self.pixels_per_inch);
        let mm = r(pixels / self.pixels_per_mm);
        match unit {
            Unit::Pixels => r(pixels),
            Unit::Inches => inches,
            Unit::Feet => r(inches_to_feet(inches)),
            Unit::Millimeters => mm,
            Unit::Centimeters => r(mm / 10.0),
            Unit::Meters => r(mm / 1000.0),
        }
    }

    /// Inverse of [`Calibration::convert`], without rounding.
    pub fn to_pixels(&self, value: f64, unit: Unit) -> f64 {
        match unit {
            Unit::Pixels => value,
            Unit::Inches => value * self.pixels_per_inch,
            Unit::Feet => feet_to_inches(value) * self.pixels_per_inch,
            Unit::Millimeters => value * self.pixels_per_mm,
            Unit::Centimeters => value * 10.0 * self.pixels_per_mm,
            Unit::Meters => value * 1000.0 * self.pixels_per_mm,
        }
    }

    /// Label text such as `6.67 inches`.
    pub fn format(&self, pixels: f64, unit: Unit) -> String {
        format!("{} {}", self.convert(pixels, unit), unit.suffix())
    }
}
