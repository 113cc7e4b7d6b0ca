//! Representation-independent hashing.
//!
//! The contract: equal values hash equal, no matter which variant holds
//! them. Words hash to their own bit pattern. Big values that fit 64 bits
//! reduce to that same bit pattern; anything wider folds its magnitude one
//! 64-bit chunk at a time and applies the sign. The fold is a wrapping
//! summation, so a freshly promoted value and the word it came from always
//! agree.

use std::hash::{Hash, Hasher};

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};

use crate::core::int::Int;

/// Wrapping-sum reduction of a big value's magnitude, negated for negative
/// sign. For any value whose magnitude fits 64 bits this is exactly the
/// two's-complement bit pattern of the value.
fn fold_big(value: &BigInt) -> u64 {
    let folded = value
        .iter_u64_digits()
        .fold(0u64, |acc, digit| acc.wrapping_add(digit));
    if value.is_negative() {
        folded.wrapping_neg()
    } else {
        folded
    }
}

impl Int {
    /// Hash of the mathematical value, identical across representations.
    pub fn hash_value(&self) -> u64 {
        match self {
            Self::Word(w) => *w as u64,
            Self::Big(b) => fold_big(b),
        }
    }

    /// Hash variant for interoperability comparisons against foreign
    /// handles: a magnitude that fits the word width is taken as an
    /// unsigned bit pattern even when it exceeds the signed range;
    /// everything else falls back to [`Int::hash_value`].
    pub fn unsigned_hash_value(&self) -> u64 {
        match self {
            Self::Word(w) => *w as u64,
            Self::Big(b) => match b.to_i64() {
                Some(w) => w as u64,
                None if !b.is_negative() && b.bits() <= 64 => {
                    b.iter_u64_digits().next().unwrap_or(0)
                }
                None => fold_big(b),
            },
        }
    }
}

impl Hash for Int {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}
