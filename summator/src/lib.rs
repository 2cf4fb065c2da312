//! Sum and average over integer slices.

use thiserror::Error;

/// Summator errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SummatorError {
    #[error("cannot average an empty slice")]
    EmptyInput,
}

/// Sums the values into a 64-bit accumulator.
///
/// An empty slice sums to 0. The widened accumulator keeps sums past the
/// 32-bit boundary exact.
///
/// # Examples
///
/// ```
/// assert_eq!(summator::sum(&[1, 2]), 3);
/// assert_eq!(summator::sum(&[]), 0);
/// assert_eq!(summator::sum(&[2_000_000_000; 3]), 6_000_000_000);
/// ```
pub fn sum(values: &[i32]) -> i64 {
    values.iter().map(|&v| i64::from(v)).sum()
}

/// Returns the arithmetic mean of the values.
///
/// # Errors
///
/// Returns [`SummatorError::EmptyInput`] for an empty slice.
///
/// # Examples
///
/// ```
/// assert_eq!(summator::average(&[3, 8, 16]), Ok(9.0));
/// assert!(summator::average(&[]).is_err());
/// ```
pub fn average(values: &[i32]) -> Result<f64, SummatorError> {
    if values.is_empty() {
        return Err(SummatorError::EmptyInput);
    }
    Ok(sum(values) as f64 / values.len() as f64)
}
