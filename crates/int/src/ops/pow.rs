//! Exponentiation, with and without a modulus.
//!
//! The non-modular path is square-and-multiply: checked word
//! multiplications first, restarting once in the big domain on overflow.
//! The modular path runs entirely in the big domain (the modulus sign
//! convention mirrors two-argument modulo). A negative exponent without a
//! modulus falls back to floating point, as Python's `int ** int` does.

use num_bigint::BigInt;
use num_traits::{One, Pow, Signed, Zero};
use tracing::trace;

use crate::core::error::{IntError, IntResult};
use crate::core::int::Int;

/// Outcome of [`Int::pow`]: integral except for the negative-exponent
/// float fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum Raised {
    /// An exact integer power.
    Exact(Int),
    /// The floating-point fallback for a negative exponent.
    Approximate(f64),
}

impl Raised {
    /// The integer result, if the power was exact.
    pub fn exact(self) -> Option<Int> {
        match self {
            Self::Exact(value) => Some(value),
            Self::Approximate(_) => None,
        }
    }
}

/// Square-and-multiply on checked word primitives. `None` means some
/// intermediate product left the word range.
fn pow_words(base: i64, exponent: u64) -> Option<i64> {
    let mut result: i64 = 1;
    let mut base = base;
    let mut exp = exponent;
    while exp != 0 {
        if exp & 1 == 1 {
            result = result.checked_mul(base)?;
        }
        exp >>= 1;
        if exp != 0 {
            base = base.checked_mul(base)?;
        }
    }
    Some(result)
}

/// `base ∈ {-1, 0, 1}` needs no multiplication for any exponent size.
fn shortcut_base(base: i64, exponent: &Int) -> Int {
    match base {
        0 => {
            if exponent.is_zero() {
                Int::Word(1)
            } else {
                Int::Word(0)
            }
        }
        1 => Int::Word(1),
        _ => {
            // -1: sign follows exponent parity.
            if exponent.is_odd() {
                Int::Word(-1)
            } else {
                Int::Word(1)
            }
        }
    }
}

impl Int {
    /// `self ** exponent`, optionally reduced by a modulus.
    ///
    /// Without a modulus: a non-negative exponent yields
    /// [`Raised::Exact`]; a negative exponent yields the floating-point
    /// [`Raised::Approximate`]. With a modulus: the result takes the
    /// modulus's sign, a zero modulus is rejected, and a negative exponent
    /// is rejected until modular-inverse support exists.
    pub fn pow(&self, exponent: &Int, modulus: Option<&Int>) -> IntResult<Raised> {
        if let Some(m) = modulus {
            return self.pow_mod(exponent, m).map(Raised::Exact);
        }

        if exponent.is_negative() {
            return Ok(Raised::Approximate(self.to_f64().powf(exponent.to_f64())));
        }

        // Shortcut bases dodge both multiplication and the exponent-size
        // bound; 1 ** (2^100) is still 1.
        if let Some(base @ -1..=1) = self.try_narrow() {
            return Ok(Raised::Exact(shortcut_base(base, exponent)));
        }

        if let (Self::Word(base), Some(exp)) = (self, exponent.to_u64()) {
            if let Some(result) = pow_words(*base, exp) {
                return Ok(Raised::Exact(Self::Word(result)));
            }
            trace!(op = "pow", "word overflow, restarting in big domain");
        }

        let exp = exponent
            .to_u64()
            .and_then(|e| u32::try_from(e).ok())
            .ok_or(IntError::ExponentTooLarge)?;
        Ok(Raised::Exact(Self::from_big(Pow::pow(&*self.as_big(), exp))))
    }

    /// Modular exponentiation, `self ** exponent mod modulus`, with the
    /// result's sign following the modulus.
    fn pow_mod(&self, exponent: &Int, modulus: &Int) -> IntResult<Int> {
        if modulus.is_zero() {
            return Err(IntError::ZeroModulus);
        }
        if exponent.is_negative() {
            return Err(IntError::NegativeExponentWithModulus);
        }

        let base = self.as_big();
        let exp = exponent.as_big();
        let m = modulus.as_big();
        let m_abs = m.abs();

        let mut result = if exp.is_zero() {
            // 1 mod m; with m == 1 that is already zero.
            BigInt::one() % &m_abs
        } else {
            base.modpow(&exp, &m_abs)
        };
        if m.is_negative() && !result.is_zero() {
            result -= &m_abs;
        }
        Ok(Self::from_big(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: i128) -> Int {
        Int::Big(BigInt::from(v))
    }

    fn exact(value: IntResult<Raised>) -> Int {
        match value.unwrap() {
            Raised::Exact(i) => i,
            Raised::Approximate(f) => panic!("expected exact result, got {f}"),
        }
    }

    #[test]
    fn small_powers_stay_on_the_word_path() {
        let r = exact(Int::new(2).pow(&Int::new(10), None));
        assert!(matches!(r, Int::Word(1024)));
        assert_eq!(exact(Int::new(3).pow(&Int::new(4), None)), Int::new(81));
        assert_eq!(exact(Int::new(-3).pow(&Int::new(3), None)), Int::new(-27));
        assert_eq!(exact(Int::new(7).pow(&Int::new(0), None)), Int::new(1));
    }

    #[test]
    fn overflowing_powers_restart_in_the_big_domain() {
        let r = exact(Int::new(2).pow(&Int::new(64), None));
        assert_eq!(r.to_string(), "18446744073709551616");

        let r = exact(Int::new(10).pow(&Int::new(30), None));
        assert_eq!(r.to_string(), "1000000000000000000000000000000");
    }

    #[test]
    fn shortcut_bases_never_multiply() {
        let huge_exponent = Int::Big(BigInt::from(1u8) << 100);
        assert_eq!(exact(Int::new(1).pow(&huge_exponent, None)), Int::new(1));
        assert_eq!(exact(Int::new(0).pow(&huge_exponent, None)), Int::new(0));
        assert_eq!(exact(Int::new(0).pow(&Int::new(0), None)), Int::new(1));
        assert_eq!(exact(Int::new(-1).pow(&huge_exponent, None)), Int::new(1));

        let odd_huge = huge_exponent.add(&Int::new(1));
        assert_eq!(exact(Int::new(-1).pow(&odd_huge, None)), Int::new(-1));

        // A wide representation of a shortcut base still shortcuts.
        assert_eq!(exact(big(1).pow(&huge_exponent, None)), Int::new(1));
    }

    #[test]
    fn oversized_exponents_are_rejected_for_real_bases() {
        let huge_exponent = Int::Big(BigInt::from(1u8) << 100);
        assert_eq!(
            Int::new(2).pow(&huge_exponent, None),
            Err(IntError::ExponentTooLarge)
        );
        assert_eq!(
            big(1i128 << 70).pow(&Int::new(i64::from(u32::MAX) + 1), None),
            Err(IntError::ExponentTooLarge)
        );
    }

    #[test]
    fn negative_exponents_fall_back_to_float() {
        match Int::new(2).pow(&Int::new(-2), None).unwrap() {
            Raised::Approximate(f) => assert_eq!(f, 0.25),
            Raised::Exact(i) => panic!("expected float, got {i}"),
        }
        match Int::new(-2).pow(&Int::new(-3), None).unwrap() {
            Raised::Approximate(f) => assert_eq!(f, -0.125),
            Raised::Exact(i) => panic!("expected float, got {i}"),
        }
    }

    #[test]
    fn modular_exponentiation_reduces() {
        assert_eq!(
            exact(Int::new(2).pow(&Int::new(10), Some(&Int::new(1000)))),
            Int::new(24)
        );
        assert_eq!(
            exact(Int::new(3).pow(&Int::new(0), Some(&Int::new(7)))),
            Int::new(1)
        );
        // Negative bases reduce into [0, m).
        assert_eq!(
            exact(Int::new(-2).pow(&Int::new(3), Some(&Int::new(5)))),
            Int::new(2)
        );
    }

    #[test]
    fn modulus_sign_carries_into_the_result() {
        // Mirrors 7 % -3 == -2.
        assert_eq!(
            exact(Int::new(7).pow(&Int::new(1), Some(&Int::new(-3)))),
            Int::new(-2)
        );
        assert_eq!(
            exact(Int::new(2).pow(&Int::new(10), Some(&Int::new(-1000)))),
            Int::new(-976)
        );
        // An exact multiple stays zero, never -m.
        assert_eq!(
            exact(Int::new(6).pow(&Int::new(1), Some(&Int::new(-3)))),
            Int::new(0)
        );
        assert_eq!(
            exact(Int::new(4).pow(&Int::new(0), Some(&Int::new(-1)))),
            Int::new(0)
        );
    }

    #[test]
    fn zero_modulus_is_rejected() {
        assert_eq!(
            Int::new(2).pow(&Int::new(3), Some(&Int::new(0))),
            Err(IntError::ZeroModulus)
        );
    }

    #[test]
    fn negative_exponent_with_modulus_is_rejected() {
        assert_eq!(
            Int::new(2).pow(&Int::new(-3), Some(&Int::new(7))),
            Err(IntError::NegativeExponentWithModulus)
        );
    }

    #[test]
    fn matches_repeated_multiplication() {
        for base in -6i64..=6 {
            for exp in 0u32..=9 {
                let mut reference = Int::new(1);
                for _ in 0..exp {
                    reference = reference.mul(&Int::new(base));
                }
                assert_eq!(
                    exact(Int::new(base).pow(&Int::new(i64::from(exp)), None)),
                    reference,
                    "{base} ** {exp}"
                );
            }
        }
    }

    #[test]
    fn big_base_powers() {
        let base = big(1i128 << 70);
        let r = exact(base.pow(&Int::new(3), None));
        assert_eq!(r, Int::Big(BigInt::from(1u8) << 210));
    }
}
