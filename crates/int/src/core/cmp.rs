//! Total ordering across the two representations.
//!
//! Word-to-word pairs compare directly. When a big operand is involved the
//! comparison first attempts an exact narrowing (a big value that does not
//! narrow cannot equal any word), and otherwise compares in the big domain.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::core::int::Int;

impl PartialEq for Int {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Word(a), Self::Word(b)) => a == b,
            (Self::Word(a), Self::Big(b)) | (Self::Big(b), Self::Word(a)) => {
                b.to_i64() == Some(*a)
            }
            (Self::Big(a), Self::Big(b)) => a == b,
        }
    }
}

impl Eq for Int {}

impl PartialOrd for Int {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Int {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Word(a), Self::Word(b)) => a.cmp(b),
            (Self::Word(a), Self::Big(b)) => match b.to_i64() {
                Some(narrowed) => a.cmp(&narrowed),
                None => BigInt::from(*a).cmp(b),
            },
            (Self::Big(a), Self::Word(b)) => match a.to_i64() {
                Some(narrowed) => narrowed.cmp(b),
                None => a.cmp(&BigInt::from(*b)),
            },
            (Self::Big(a), Self::Big(b)) => a.cmp(b),
        }
    }
}

/// An externally-owned opaque numeric handle, compared as an unsigned
/// machine word. Supplied by the caller when it needs equality between
/// integers and pointer-like foreign values; the engine never constructs
/// one itself.
pub trait ForeignNumeric {
    /// The handle's identity interpreted as an unsigned 64-bit word.
    fn as_unsigned_word(&self) -> u64;
}

impl Int {
    /// Equality against a foreign handle. The handle's word is unsigned,
    /// so only values in `[0, 2^64)` can ever match.
    pub fn eq_foreign(&self, other: &dyn ForeignNumeric) -> bool {
        self.to_u64() == Some(other.as_unsigned_word())
    }
}
