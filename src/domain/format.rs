//! Report number rendering: truncation and scientific fallback

use crate::domain::entities::DecimalPlaces;

/// Cut `value` to the requested number of decimal digits, toward zero.
///
/// Truncation, not rounding: displayed values may be short of the true
/// value by up to one unit in the last digit, never beyond it.
pub fn truncate(value: f64, places: DecimalPlaces) -> f64 {
    let factor = 10f64.powi(places.exponent());
    (value * factor).trunc() / factor
}

/// Render a metric for the report.
///
/// Fixed notation at the requested precision, unless truncation would
/// turn a nonzero value into a bare zero. In that case a one-digit
/// scientific form is used instead, marked `(auto modified)`, so a tiny
/// quantity is never reported as plain 0. An exact zero prints as
/// `0e+00`.
pub fn format_number(value: f64, places: DecimalPlaces) -> String {
    let truncated = truncate(value, places);
    if truncated != 0.0 {
        return format!("{truncated:.prec$}", prec = places.count());
    }
    if value == 0.0 {
        return "0e+00".to_string();
    }
    let exponent = value.abs().log10().floor() as i32;
    let mantissa = (value / 10f64.powi(exponent) * 10.0).trunc() / 10.0;
    format!("{mantissa:.1}e{exponent:+03} (auto modified)")
}
