//! Floor division, modulo, and true division.
//!
//! Quotients round toward negative infinity and remainders take the
//! divisor's sign, which is what distinguishes these from the hardware
//! truncating operations. The divisor is checked for zero before any
//! computation.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::core::error::{IntError, IntResult};
use crate::core::int::{Int, big_to_f64};

/// Floored word quotient. `None` is the lone overflow case,
/// `i64::MIN / -1`, which must be finished in the big domain.
fn floor_div_words(a: i64, b: i64) -> Option<i64> {
    let q = a.checked_div(b)?;
    // Signs differ and the division was inexact: round down one more.
    if (a ^ b) < 0 && q * b != a { Some(q - 1) } else { Some(q) }
}

/// Floored word remainder. `None` mirrors [`floor_div_words`].
fn floor_mod_words(a: i64, b: i64) -> Option<i64> {
    let r = a.checked_rem(b)?;
    if r != 0 && (r ^ b) < 0 { Some(r + b) } else { Some(r) }
}

/// Floored big quotient: truncate, then round down when the signs differ
/// and the division left a remainder.
fn floor_div_big(a: &BigInt, b: &BigInt) -> BigInt {
    let q = a / b;
    if a.is_negative() != b.is_negative() && &q * b != *a {
        q - 1
    } else {
        q
    }
}

/// Euclidean remainder against a positive modulus, in `[0, m)`.
fn euclidean_mod_big(a: &BigInt, m: &BigInt) -> BigInt {
    let r = a % m;
    if r.is_negative() { r + m } else { r }
}

/// Python modulo for a negative divisor: the Euclidean remainder against
/// `|b|`, shifted into `(b, 0]` unless it is exactly zero.
fn negative_mod_big(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() {
        return BigInt::zero();
    }
    let magnitude = -b;
    let r = euclidean_mod_big(a, &magnitude);
    if r.is_zero() { r } else { r - magnitude }
}

impl Int {
    /// Floor division, `floor(self / divisor)`.
    pub fn floor_div(&self, divisor: &Int) -> IntResult<Int> {
        if divisor.is_zero() {
            return Err(IntError::DivisionByZero);
        }
        match (self, divisor) {
            (Self::Word(a), Self::Word(b)) => match floor_div_words(*a, *b) {
                Some(q) => Ok(Self::Word(q)),
                None => Ok(Self::from_big(floor_div_big(
                    &BigInt::from(*a),
                    &BigInt::from(*b),
                ))),
            },
            _ => Ok(Self::from_big(floor_div_big(
                &self.as_big(),
                &divisor.as_big(),
            ))),
        }
    }

    /// Modulo with the divisor's sign, `self - floor(self / divisor) * divisor`.
    pub fn modulo(&self, divisor: &Int) -> IntResult<Int> {
        if divisor.is_zero() {
            return Err(IntError::DivisionByZero);
        }
        match (self, divisor) {
            (Self::Word(a), Self::Word(b)) => match floor_mod_words(*a, *b) {
                Some(r) => Ok(Self::Word(r)),
                None => Ok(Self::Word(0)),
            },
            _ => {
                let a = self.as_big();
                let b = divisor.as_big();
                let r = if b.is_negative() {
                    negative_mod_big(&a, &b)
                } else {
                    euclidean_mod_big(&a, &b)
                };
                Ok(Self::from_big(r))
            }
        }
    }

    /// Quotient and remainder in one call, consistent with
    /// [`Int::floor_div`] and [`Int::modulo`].
    pub fn divmod(&self, divisor: &Int) -> IntResult<(Int, Int)> {
        if divisor.is_zero() {
            return Err(IntError::DivisionByZero);
        }
        match (self, divisor) {
            (Self::Word(a), Self::Word(b)) => {
                if let (Some(q), Some(r)) = (floor_div_words(*a, *b), floor_mod_words(*a, *b)) {
                    return Ok((Self::Word(q), Self::Word(r)));
                }
                // i64::MIN divided by -1.
                let q = floor_div_big(&BigInt::from(*a), &BigInt::from(*b));
                Ok((Self::from_big(q), Self::Word(0)))
            }
            _ => {
                let a = self.as_big();
                let b = divisor.as_big();
                let q = floor_div_big(&a, &b);
                let r = &*a - &q * &*b;
                Ok((Self::from_big(q), Self::from_big(r)))
            }
        }
    }

    /// True division to a float.
    ///
    /// Exactly divisible operands convert the exact quotient, so large
    /// multiples do not lose precision; everything else divides the two
    /// float conversions.
    pub fn true_div(&self, divisor: &Int) -> IntResult<f64> {
        if divisor.is_zero() {
            return Err(IntError::DivisionByZero);
        }
        if let (Self::Word(a), Self::Word(b)) = (self, divisor) {
            match a.checked_rem(*b) {
                Some(0) => return Ok((a / b) as f64),
                Some(_) => return Ok(*a as f64 / *b as f64),
                // i64::MIN / -1: finish below in the big domain.
                None => {}
            }
        }
        let a = self.as_big();
        let b = divisor.as_big();
        let q = &*a / &*b;
        if (&q * &*b) == *a {
            Ok(big_to_f64(&q))
        } else {
            Ok(big_to_f64(&a) / big_to_f64(&b))
        }
    }
}
