//! Parsing of dimension strings such as `"14sp"`, `"4dp"` or `"0.5in"`.
//!
//! Dimensions let configuration be written in device-independent units. They are
//! converted into [Pt] using a set of [DisplayMetrics] supplied by the host.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::{JustifyError, Pt};

/// A decimal number, then a unit made of ASCII letters
static DIMENSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(\.\d+)?)\s*([a-zA-Z]+)\s*$").expect("valid dimension regex")
});

/// The unit part of a [Dimension]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DimensionUnit {
    /// Raw device pixels
    Px,
    /// Density-independent pixels (`dp` or `dip`)
    Dp,
    /// Scale-independent pixels, which also follow the user's font scale
    Sp,
    /// Typographic points
    Pt,
    /// Inches
    In,
    /// Millimetres
    Mm,
}

impl DimensionUnit {
    fn from_suffix(suffix: &str) -> Option<DimensionUnit> {
        match suffix.to_ascii_lowercase().as_str() {
            "px" => Some(DimensionUnit::Px),
            "dp" | "dip" => Some(DimensionUnit::Dp),
            "sp" => Some(DimensionUnit::Sp),
            "pt" => Some(DimensionUnit::Pt),
            "in" => Some(DimensionUnit::In),
            "mm" => Some(DimensionUnit::Mm),
            _ => None,
        }
    }
}

/// Display characteristics used to convert device-dependent units into points.
///
/// The defaults describe a 72 dpi display at density 1, on which a pixel, a dp,
/// an sp and a point are all the same length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DisplayMetrics {
    /// Scaling factor for density-independent pixels
    pub density: f32,
    /// Scaling factor for scale-independent pixels (density times font scale)
    pub scaled_density: f32,
    /// Physical pixels per inch
    pub dpi: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        DisplayMetrics {
            density: 1.0,
            scaled_density: 1.0,
            dpi: 72.0,
        }
    }
}

/// A non-negative number paired with a unit, parsed from strings like `"12.5sp"`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dimension {
    pub value: f32,
    pub unit: DimensionUnit,
}

impl Dimension {
    /// Parse a dimension string. Whitespace is allowed around and between the number
    /// and the unit, and the unit is matched case-insensitively.
    pub fn parse(dimension: &str) -> Result<Dimension, JustifyError> {
        let malformed = || JustifyError::MalformedDimension(dimension.to_string());

        let caps = DIMENSION_PATTERN.captures(dimension).ok_or_else(malformed)?;
        let value: f32 = caps[1].parse().map_err(|_| malformed())?;
        let unit = DimensionUnit::from_suffix(&caps[3]).ok_or_else(malformed)?;
        Ok(Dimension { value, unit })
    }

    /// Convert the dimension into points on a display with the given metrics
    pub fn to_pt(&self, metrics: &DisplayMetrics) -> Pt {
        let px_to_pt = 72.0 / metrics.dpi;
        match self.unit {
            DimensionUnit::Px => Pt(self.value * px_to_pt),
            DimensionUnit::Dp => Pt(self.value * metrics.density * px_to_pt),
            DimensionUnit::Sp => Pt(self.value * metrics.scaled_density * px_to_pt),
            DimensionUnit::Pt => Pt(self.value),
            DimensionUnit::In => Pt(self.value * 72.0),
            DimensionUnit::Mm => Pt(self.value * 72.0 / 25.4),
        }
    }
}

impl FromStr for Dimension {
    type Err = JustifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::parse(s)
    }
}

/// Parse a dimension string and convert it straight into points
pub fn parse_dimension(dimension: &str, metrics: &DisplayMetrics) -> Result<Pt, JustifyError> {
    Ok(Dimension::parse(dimension)?.to_pt(metrics))
}
