//! The dual-representation integer value.
//!
//! [`Int`] keeps values that fit a signed 64-bit word in the `Word` variant
//! and spills everything else into `num-bigint` storage. Arithmetic detects
//! word overflow with checked primitives *before* any result is produced and
//! recomputes in the big domain, so promotion is never observable as anything
//! but a representation change.

use std::borrow::Cow;
use std::fmt;

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

/// An immutable integer with Python `int` semantics.
///
/// The two variants are semantically interchangeable: equality, ordering,
/// and hashing agree for any two values denoting the same mathematical
/// integer, whichever variant holds each side. Representation only affects
/// performance.
///
/// Arithmetic results are narrowed back to `Word` whenever they fit, but a
/// wide `Big` holding a small value is legal and behaves identically.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Int {
    /// Fast path: the value fits the native signed 64-bit word.
    Word(i64),
    /// Slow path: arbitrary-precision sign-and-magnitude storage.
    Big(BigInt),
}

impl Int {
    /// Create a word-sized integer.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self::Word(value)
    }

    /// Create from a big integer, narrowing to `Word` when the value fits.
    pub fn from_big(value: BigInt) -> Self {
        match value.to_i64() {
            Some(word) => Self::Word(word),
            None => Self::Big(value),
        }
    }

    /// Lossless widening into the big domain.
    pub fn to_big(&self) -> BigInt {
        match self {
            Self::Word(w) => BigInt::from(*w),
            Self::Big(b) => b.clone(),
        }
    }

    /// Exact, checked narrowing; succeeds iff the value fits the word range.
    pub fn try_narrow(&self) -> Option<i64> {
        match self {
            Self::Word(w) => Some(*w),
            Self::Big(b) => b.to_i64(),
        }
    }

    /// Borrow the value as a big integer, widening words on the fly.
    pub(crate) fn as_big(&self) -> Cow<'_, BigInt> {
        match self {
            Self::Word(w) => Cow::Owned(BigInt::from(*w)),
            Self::Big(b) => Cow::Borrowed(b),
        }
    }

    /// True iff the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Word(w) => *w == 0,
            Self::Big(b) => b.is_zero(),
        }
    }

    /// True iff the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Word(w) => *w < 0,
            Self::Big(b) => b.is_negative(),
        }
    }

    /// True iff the value is strictly positive.
    pub fn is_positive(&self) -> bool {
        match self {
            Self::Word(w) => *w > 0,
            Self::Big(b) => b.is_positive(),
        }
    }

    /// True iff the low bit of the magnitude is set.
    pub(crate) fn is_odd(&self) -> bool {
        match self {
            Self::Word(w) => w & 1 == 1,
            Self::Big(b) => b.iter_u64_digits().next().is_some_and(|d| d & 1 == 1),
        }
    }

    /// Fewest bits necessary to express the magnitude, excluding the sign.
    ///
    /// Zero reports zero bits.
    pub fn bit_length(&self) -> u64 {
        match self {
            Self::Word(w) => u64::from(64 - w.unsigned_abs().leading_zeros()),
            Self::Big(b) => b.bits(),
        }
    }

    /// The value as `i64`, if it fits. Alias of [`Int::try_narrow`].
    #[inline]
    pub fn to_i64(&self) -> Option<i64> {
        self.try_narrow()
    }

    /// The value as `u64`, if it is non-negative and fits.
    pub fn to_u64(&self) -> Option<u64> {
        match self {
            Self::Word(w) => u64::try_from(*w).ok(),
            Self::Big(b) => b.to_u64(),
        }
    }

    /// The nearest `f64`, rounding to even; saturates to infinity for
    /// values beyond the float range.
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Word(w) => *w as f64,
            Self::Big(b) => big_to_f64(b),
        }
    }
}

/// Nearest `f64` for a big value, saturating to infinity out of range.
pub(crate) fn big_to_f64(value: &BigInt) -> f64 {
    value.to_f64().unwrap_or_else(|| {
        if value.is_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    })
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(w) => write!(f, "{w}"),
            Self::Big(b) => write!(f, "{b}"),
        }
    }
}

impl Default for Int {
    fn default() -> Self {
        Self::Word(0)
    }
}

macro_rules! int_from_word {
    { $($type:ty)* } => {
        $(
            impl From<$type> for Int {
                #[inline]
                fn from(value: $type) -> Self {
                    Self::Word(i64::from(value))
                }
            }
        )*
    };
}

int_from_word! { i8 i16 i32 u8 u16 u32 }

impl From<i64> for Int {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Word(value)
    }
}

impl From<bool> for Int {
    /// `false` is `0`, `true` is `1`, as in Python arithmetic.
    #[inline]
    fn from(value: bool) -> Self {
        Self::Word(i64::from(value))
    }
}

impl From<u64> for Int {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(word) => Self::Word(word),
            Err(_) => Self::Big(BigInt::from(value)),
        }
    }
}

impl From<i128> for Int {
    fn from(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(word) => Self::Word(word),
            Err(_) => Self::Big(BigInt::from(value)),
        }
    }
}

impl From<u128> for Int {
    fn from(value: u128) -> Self {
        match i64::try_from(value) {
            Ok(word) => Self::Word(word),
            Err(_) => Self::Big(BigInt::from(value)),
        }
    }
}

impl From<BigInt> for Int {
    /// Narrows to `Word` when the value fits.
    fn from(value: BigInt) -> Self {
        Self::from_big(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_big_narrows_in_range_values() {
        let narrow = Int::from_big(BigInt::from(42));
        assert!(matches!(narrow, Int::Word(42)));

        let wide = Int::from_big(BigInt::from(i64::MAX) + 1);
        assert!(matches!(wide, Int::Big(_)));
    }

    #[test]
    fn try_narrow_is_exact() {
        assert_eq!(Int::new(i64::MIN).try_narrow(), Some(i64::MIN));
        assert_eq!(Int::Big(BigInt::from(7)).try_narrow(), Some(7));
        assert_eq!(Int::Big(BigInt::from(i64::MAX) + 1).try_narrow(), None);
        assert_eq!(Int::Big(BigInt::from(i64::MIN) - 1).try_narrow(), None);
    }

    #[test]
    fn widening_round_trips() {
        for v in [0, 1, -1, i64::MAX, i64::MIN] {
            assert_eq!(Int::from_big(Int::new(v).to_big()), Int::new(v));
        }
    }

    #[test]
    fn bit_length_matches_magnitude() {
        assert_eq!(Int::new(0).bit_length(), 0);
        assert_eq!(Int::new(1).bit_length(), 1);
        assert_eq!(Int::new(-1).bit_length(), 1);
        assert_eq!(Int::new(255).bit_length(), 8);
        assert_eq!(Int::new(256).bit_length(), 9);
        assert_eq!(Int::new(i64::MIN).bit_length(), 64);
        assert_eq!(Int::Big(BigInt::from(1u128) << 100).bit_length(), 101);
    }

    #[test]
    fn display_is_decimal_for_both_variants() {
        assert_eq!(Int::new(-42).to_string(), "-42");
        let wide = Int::Big(BigInt::from(i64::MAX) + 1);
        assert_eq!(wide.to_string(), "9223372036854775808");
    }

    #[test]
    fn primitive_conversions() {
        assert_eq!(Int::from(42u8), Int::new(42));
        assert_eq!(Int::from(true), Int::new(1));
        assert_eq!(Int::from(false), Int::new(0));
        assert!(matches!(Int::from(u64::MAX), Int::Big(_)));
        assert_eq!(Int::from(u64::MAX).to_u64(), Some(u64::MAX));
        assert_eq!(Int::new(-1).to_u64(), None);
    }

    #[test]
    fn to_f64_is_finite_for_word_values() {
        assert_eq!(Int::new(3).to_f64(), 3.0);
        assert_eq!(Int::new(-3).to_f64(), -3.0);
        let huge = Int::Big(BigInt::from(1u8) << 2000);
        assert!(huge.to_f64().is_infinite());
    }
}
