//! Unit conversion and grid utilities
//!
//! Drawer dimensions are entered in inches; the layout engine works in
//! internal grid units. A fixed scale converts between the two and every
//! coordinate is snapped to a grid quantum.
//! Supports decimal and fractional inch parsing and formatting.

use serde::{Deserialize, Serialize};

/// Internal units per inch
pub const DEFAULT_UNITS_PER_INCH: f64 = 10.0;

/// Grid-snap quantum in internal units (1/2")
pub const DEFAULT_GRID_SIZE: f64 = 5.0;

/// Smallest block width or height in internal units (2")
pub const DEFAULT_MIN_SIZE: f64 = 20.0;

/// Tolerance for "touches the line" checks, in internal units
pub const DEFAULT_ADJACENCY_EPSILON: f64 = 1.0;

/// Width/depth reduction applied before manufacturing export (1/16")
pub const MANUFACTURING_TOLERANCE_IN: f64 = 0.0625;

/// Snap a value to the nearest multiple of `grid`.
pub fn snap_to_grid(value: f64, grid: f64) -> f64 {
    (value / grid).round() * grid
}

/// Grid parameters shared by every layout operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Internal units per inch
    pub units_per_inch: f64,
    /// Snap quantum in internal units
    pub grid_size: f64,
    /// Minimum block extent in internal units
    pub min_size: f64,
    /// Adjacency tolerance in internal units
    pub epsilon: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            units_per_inch: DEFAULT_UNITS_PER_INCH,
            grid_size: DEFAULT_GRID_SIZE,
            min_size: DEFAULT_MIN_SIZE,
            epsilon: DEFAULT_ADJACENCY_EPSILON,
        }
    }
}

impl GridSpec {
    /// Snap a coordinate to this grid.
    pub fn snap(&self, value: f64) -> f64 {
        snap_to_grid(value, self.grid_size)
    }

    /// Convert inches to internal units (unsnapped).
    pub fn to_units(&self, inches: f64) -> f64 {
        inches * self.units_per_inch
    }

    /// Convert internal units to inches.
    pub fn to_inches(&self, units: f64) -> f64 {
        units / self.units_per_inch
    }

    /// True when `value` sits on a grid line (within a thousandth of a unit).
    pub fn is_on_grid(&self, value: f64) -> bool {
        (value - self.snap(value)).abs() < 1e-3
    }

    /// Smallest extent that can still be split into two legal children.
    pub fn min_splittable(&self) -> f64 {
        self.min_size * 2.0
    }
}

/// Parse an inch string to decimal inches
///
/// Accepts decimal (`"12.5"`), whole-plus-fraction (`"12 1/2"`) and bare
/// fractions (`"3/4"`). A trailing `"` or `in` is ignored.
pub fn parse_inches(input: &str) -> Result<f64, String> {
    let input = input
        .trim()
        .trim_end_matches('"')
        .trim_end_matches("in")
        .trim();
    if input.is_empty() {
        return Err("Empty dimension".to_string());
    }

    if !input.contains('/') {
        return input.parse::<f64>().map_err(|e| e.to_string());
    }

    let mut total = 0.0;
    let mut negative = false;
    for part in input.split_whitespace() {
        let part = if let Some(rest) = part.strip_prefix('-') {
            negative = true;
            rest
        } else {
            part
        };
        if part.contains('/') {
            let frac_parts: Vec<&str> = part.split('/').collect();
            if frac_parts.len() != 2 {
                return Err("Invalid fraction format".to_string());
            }
            let num = frac_parts[0]
                .parse::<f64>()
                .map_err(|_| "Invalid numerator")?;
            let den = frac_parts[1]
                .parse::<f64>()
                .map_err(|_| "Invalid denominator")?;
            if den == 0.0 {
                return Err("Division by zero".to_string());
            }
            total += num / den;
        } else {
            total += part.parse::<f64>().map_err(|_| "Invalid number part")?;
        }
    }

    Ok(if negative { -total } else { total })
}

/// Format decimal inches as a whole-plus-fraction string, to the nearest 1/16"
pub fn format_inches(inches: f64) -> String {
    let sixteenths = (inches.abs() * 16.0).round() as u64;
    let sign = if inches < 0.0 && sixteenths > 0 { "-" } else { "" };
    let whole = sixteenths / 16;
    let mut num = sixteenths % 16;
    let mut den = 16;
    while num > 0 && num % 2 == 0 {
        num /= 2;
        den /= 2;
    }

    match (whole, num) {
        (w, 0) => format!("{}{}", sign, w),
        (0, n) => format!("{}{}/{}", sign, n, den),
        (w, n) => format!("{}{} {}/{}", sign, w, n, den),
    }
}
