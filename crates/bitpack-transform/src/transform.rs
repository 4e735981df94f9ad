//! Pre/post transforms that map domain values onto integer field slots.
//!
//! Two independent strategies:
//! - **[FixedPoint]**: quantizes a real number to an integer by a scale
//!   factor, for packing into a signed (two's-complement) field.
//! - **[Bias]**: offset-binary. Adds a constant before storing a value in an
//!   unsigned field and subtracts it after reading.
//!
//! Neither strategy range-checks. Whatever does not fit the field is
//! truncated by the codec like any other out-of-range value.

use std::fmt;

/// Errors that can occur when configuring a transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Scale is zero or non-finite (NaN or infinity).
    InvalidScale,
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::InvalidScale => f.write_str("scale must be finite and non-zero"),
        }
    }
}

impl std::error::Error for TransformError {}

/// Fixed-point quantization: `raw = round(value * scale)`, `value = raw / scale`.
///
/// Precision is `1 / scale`; anything finer is lost on encode.
///
/// # Example
///
/// ```
/// use bitpack_transform::transform::FixedPoint;
///
/// let position = FixedPoint::new(100.0).unwrap();
/// assert_eq!(position.encode(-3_000_000.0), -300_000_000);
/// assert_eq!(position.decode(-300_000_000), -3_000_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPoint {
    scale: f64,
}

impl FixedPoint {
    pub fn new(scale: f64) -> Result<Self, TransformError> {
        if !scale.is_finite() || scale == 0.0 {
            return Err(TransformError::InvalidScale);
        }

        Ok(Self { scale })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Rounds half away from zero. Saturates at the `i64` bounds; NaN becomes 0.
    pub fn encode(&self, value: f64) -> i64 {
        (value * self.scale).round() as i64
    }

    pub fn decode(&self, raw: i64) -> f64 {
        raw as f64 / self.scale
    }
}

/// Offset-binary: `slot = value + bias`, `value = slot - bias`.
///
/// Stores a signed range in an unsigned field. With a `w`-bit field the range
/// that survives exactly is `[-bias, 2^w - 1 - bias]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bias {
    bias: i64,
}

impl Bias {
    pub const fn new(bias: i64) -> Self {
        Self { bias }
    }

    pub fn bias(&self) -> i64 {
        self.bias
    }

    /// Biased slot pattern. Negative sums wrap as two's-complement before the
    /// codec masks them to the field width.
    pub fn encode(&self, value: i64) -> u64 {
        value.wrapping_add(self.bias) as u64
    }

    pub fn decode(&self, slot: u64) -> i64 {
        (slot as i64).wrapping_sub(self.bias)
    }
}
