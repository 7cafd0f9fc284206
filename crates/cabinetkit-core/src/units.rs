//! Length helpers
//!
//! All design geometry is kept in centimeters. These helpers format and parse
//! centimeter values for labels, prompts and form input.

use crate::constants::EDGE_TOLERANCE;

/// Format a centimeter value for display, dropping a redundant fraction.
///
/// ```
/// use cabinetkit_core::format_cm;
/// assert_eq!(format_cm(60.0), "60cm");
/// assert_eq!(format_cm(42.5), "42.5cm");
/// ```
pub fn format_cm(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract().abs() < f64::EPSILON {
        format!("{}cm", rounded as i64)
    } else {
        format!("{:.1}cm", rounded)
    }
}

/// Parse a length typed by a user: `"60"`, `"60cm"`, `"600mm"` or `"0.6m"`.
pub fn parse_cm(input: &str) -> Result<f64, String> {
    let s = input.trim().to_lowercase();
    if s.is_empty() {
        return Err("Empty length".to_string());
    }

    let (number, factor) = if let Some(v) = s.strip_suffix("cm") {
        (v, 1.0)
    } else if let Some(v) = s.strip_suffix("mm") {
        (v, 0.1)
    } else if let Some(v) = s.strip_suffix('m') {
        (v, 100.0)
    } else {
        (s.as_str(), 1.0)
    };

    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| format!("Invalid length: {}", input))?;
    if !value.is_finite() {
        return Err(format!("Invalid length: {}", input));
    }
    Ok(value * factor)
}

/// Compare two centimeter values within the shared edge tolerance.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EDGE_TOLERANCE
}
