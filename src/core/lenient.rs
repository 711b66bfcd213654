//! Best-effort number coercion: anything that is not a finite number becomes zero.

use std::convert::Infallible;

/// Parse user input, treating blank, malformed, and non-finite values as zero.
#[must_use]
pub fn coerce(text: &str) -> f64 {
    text.trim().parse().map_or(0.0, finite_or_zero)
}

#[must_use]
pub const fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// [`coerce`] in the shape of a `clap` value parser.
#[allow(clippy::unnecessary_wraps)]
pub fn parse(text: &str) -> Result<f64, Infallible> {
    Ok(coerce(text))
}
