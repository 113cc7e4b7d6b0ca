//! Error types for integer operations.
//!
//! Word-overflow during fast-path arithmetic is *not* an error: it is
//! recovered internally by promotion and never surfaces. Everything here is
//! a real failure tied to the inputs of a single call. Unsupported operand
//! kinds are not an error either; they travel through the
//! [`OpResult::NotImplemented`](crate::ops::dispatch::OpResult) sentinel so
//! the caller's dispatch layer can retry a reflected operation.

use thiserror::Error;

/// Result type alias for integer operations.
pub type IntResult<T> = Result<T, IntError>;

/// Typed failures for integer operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntError {
    /// Division or modulo with a zero divisor.
    #[error("integer division or modulo by zero")]
    DivisionByZero,

    /// The value does not fit the requested byte length.
    #[error("int too big to convert")]
    TooBigToConvert,

    /// A left-shift count too large to be applied to a big operand.
    #[error("shift count too large")]
    ShiftTooLarge,

    /// A non-modular exponent too large for the big-base power path.
    #[error("exponent too large")]
    ExponentTooLarge,

    /// Shift with a negative count.
    #[error("negative shift count")]
    NegativeShiftCount,

    /// Byte-serialization length below zero.
    #[error("length argument must be non-negative")]
    NegativeLength,

    /// A negative value serialized without a sign bit.
    #[error("can't convert negative int to unsigned")]
    NegativeUnsigned,

    /// Modular exponentiation with a zero modulus.
    #[error("pow() 3rd argument cannot be 0")]
    ZeroModulus,

    /// Modular exponentiation with a negative exponent. Requires a modular
    /// inverse, which this engine does not compute.
    #[error("pow() 2nd argument cannot be negative when 3rd argument specified")]
    NegativeExponentWithModulus,

    /// An iterator byte source yielded a value outside `0..=255`.
    #[error("bytes must be in range(0, 256)")]
    ByteOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(
            IntError::DivisionByZero.to_string(),
            "integer division or modulo by zero"
        );
        assert_eq!(IntError::TooBigToConvert.to_string(), "int too big to convert");
        assert_eq!(
            IntError::NegativeUnsigned.to_string(),
            "can't convert negative int to unsigned"
        );
        assert_eq!(
            IntError::ZeroModulus.to_string(),
            "pow() 3rd argument cannot be 0"
        );
    }
}
