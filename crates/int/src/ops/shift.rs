//! Left and right shifts.
//!
//! Counts are mathematical, not hardware: a word left shift is verified by
//! shifting back, and a right shift at or past the word width saturates to
//! the all-sign-bits result instead of wrapping the count. Negative counts
//! are rejected before anything else.

use num_traits::Signed;
use tracing::trace;

use crate::core::error::{IntError, IntResult};
use crate::core::int::Int;

/// A shift count for the big domain, if it fits one at all.
fn narrow_count(count: &Int) -> Option<u32> {
    count.to_u64().and_then(|c| u32::try_from(c).ok())
}

impl Int {
    /// Left shift, `self * 2^count`.
    ///
    /// Fails with [`IntError::NegativeShiftCount`] for a negative count and
    /// [`IntError::ShiftTooLarge`] when a nonzero value would be shifted by
    /// a count beyond the machine-representable range.
    pub fn shl(&self, count: &Int) -> IntResult<Int> {
        if count.is_negative() {
            return Err(IntError::NegativeShiftCount);
        }
        if self.is_zero() {
            return Ok(Int::Word(0));
        }

        if let (Self::Word(value), Some(c)) = (self, count.to_u64()) {
            if c < 64 {
                let shifted = value << c;
                if shifted >> c == *value {
                    return Ok(Self::Word(shifted));
                }
            }
            trace!(op = "shl", count = c, "word overflow, redoing in big domain");
        }

        let c = narrow_count(count).ok_or(IntError::ShiftTooLarge)?;
        Ok(Self::from_big(&*self.as_big() << c))
    }

    /// Arithmetic (sign-preserving) right shift, `floor(self / 2^count)`.
    ///
    /// Fails with [`IntError::NegativeShiftCount`] for a negative count.
    /// Counts at or beyond the operand's width saturate exactly: the result
    /// is `0` for non-negative values and `-1` for negative ones.
    pub fn shr(&self, count: &Int) -> IntResult<Int> {
        if count.is_negative() {
            return Err(IntError::NegativeShiftCount);
        }

        match (self, count.to_u64()) {
            (Self::Word(value), Some(c)) => {
                let c = c.min(63);
                Ok(Self::Word(value >> c))
            }
            (Self::Word(value), None) => Ok(Self::Word(value >> 63)),
            (Self::Big(b), Some(c)) => Ok(Self::from_big(b >> c)),
            (Self::Big(b), None) => {
                // The count exceeds any representable bit length; the floor
                // shift has already saturated.
                Ok(Self::Word(if b.is_negative() { -1 } else { 0 }))
            }
        }
    }
}
