//! Add, subtract, multiply, negate, and the bitwise operators.
//!
//! Word pairs run on checked primitives; the overflow signal is consumed
//! right here by recomputing the same two operands in the big domain, so
//! callers only ever see a finished value. Anything already big computes
//! big and narrows the result opportunistically.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use tracing::trace;

use crate::core::int::Int;

/// Shift distance when the operand's magnitude is a power of two.
fn power_of_two_shift(value: &BigInt) -> Option<u64> {
    if value.is_zero() {
        return None;
    }
    let bits = value.bits();
    (value.trailing_zeros() == Some(bits - 1)).then_some(bits - 1)
}

/// Big-domain product. A power-of-two magnitude on either side turns the
/// multiplication into a shift; the result is bit-for-bit identical to the
/// generic product.
fn mul_big(a: &BigInt, b: &BigInt) -> BigInt {
    if let Some(count) = power_of_two_shift(b) {
        let shifted = a << count;
        return if b.is_negative() { -shifted } else { shifted };
    }
    if let Some(count) = power_of_two_shift(a) {
        let shifted = b << count;
        return if a.is_negative() { -shifted } else { shifted };
    }
    a * b
}

impl Int {
    /// Sum of two integers. Never fails; word overflow promotes.
    pub fn add(&self, other: &Int) -> Int {
        match (self, other) {
            (Self::Word(a), Self::Word(b)) => match a.checked_add(*b) {
                Some(sum) => Self::Word(sum),
                None => {
                    trace!(op = "add", "word overflow, recomputing in big domain");
                    Self::from_big(BigInt::from(*a) + BigInt::from(*b))
                }
            },
            _ => Self::from_big(&*self.as_big() + &*other.as_big()),
        }
    }

    /// Difference of two integers. Never fails; word overflow promotes.
    pub fn sub(&self, other: &Int) -> Int {
        match (self, other) {
            (Self::Word(a), Self::Word(b)) => match a.checked_sub(*b) {
                Some(diff) => Self::Word(diff),
                None => {
                    trace!(op = "sub", "word overflow, recomputing in big domain");
                    Self::from_big(BigInt::from(*a) - BigInt::from(*b))
                }
            },
            _ => Self::from_big(&*self.as_big() - &*other.as_big()),
        }
    }

    /// Product of two integers. Never fails; word overflow promotes.
    pub fn mul(&self, other: &Int) -> Int {
        match (self, other) {
            (Self::Word(a), Self::Word(b)) => match a.checked_mul(*b) {
                Some(product) => Self::Word(product),
                None => {
                    trace!(op = "mul", "word overflow, recomputing in big domain");
                    Self::from_big(mul_big(&BigInt::from(*a), &BigInt::from(*b)))
                }
            },
            _ => Self::from_big(mul_big(&self.as_big(), &other.as_big())),
        }
    }

    /// Arithmetic negation. The most-negative word promotes instead of
    /// wrapping.
    pub fn neg(&self) -> Int {
        match self {
            Self::Word(w) => match w.checked_neg() {
                Some(negated) => Self::Word(negated),
                None => Self::Big(-BigInt::from(*w)),
            },
            Self::Big(b) => Self::from_big(-b),
        }
    }

    /// Absolute value. `|i64::MIN|` promotes instead of wrapping.
    pub fn abs(&self) -> Int {
        match self {
            Self::Word(w) => match w.checked_abs() {
                Some(magnitude) => Self::Word(magnitude),
                None => Self::Big(-BigInt::from(*w)),
            },
            Self::Big(b) => Self::from_big(b.abs()),
        }
    }

    /// Bitwise complement, `-(x + 1)`. Always fits the operand's domain.
    pub fn invert(&self) -> Int {
        match self {
            Self::Word(w) => Self::Word(!w),
            Self::Big(b) => Self::from_big(-(b + 1)),
        }
    }

    /// Bitwise AND over the infinite two's-complement encoding.
    pub fn bit_and(&self, other: &Int) -> Int {
        match (self, other) {
            (Self::Word(a), Self::Word(b)) => Self::Word(a & b),
            _ => Self::from_big(&*self.as_big() & &*other.as_big()),
        }
    }

    /// Bitwise OR over the infinite two's-complement encoding.
    pub fn bit_or(&self, other: &Int) -> Int {
        match (self, other) {
            (Self::Word(a), Self::Word(b)) => Self::Word(a | b),
            _ => Self::from_big(&*self.as_big() | &*other.as_big()),
        }
    }

    /// Bitwise XOR over the infinite two's-complement encoding.
    pub fn bit_xor(&self, other: &Int) -> Int {
        match (self, other) {
            (Self::Word(a), Self::Word(b)) => Self::Word(a ^ b),
            _ => Self::from_big(&*self.as_big() ^ &*other.as_big()),
        }
    }
}

macro_rules! binary_op_traits {
    { $($trait:ident $method:ident => $inherent:ident;)* } => {
        $(
            impl std::ops::$trait<&Int> for &Int {
                type Output = Int;

                fn $method(self, rhs: &Int) -> Int {
                    Int::$inherent(self, rhs)
                }
            }

            impl std::ops::$trait for Int {
                type Output = Int;

                fn $method(self, rhs: Int) -> Int {
                    Int::$inherent(&self, &rhs)
                }
            }
        )*
    };
}

binary_op_traits! {
    Add add => add;
    Sub sub => sub;
    Mul mul => mul;
    BitAnd bitand => bit_and;
    BitOr bitor => bit_or;
    BitXor bitxor => bit_xor;
}

impl std::ops::Neg for &Int {
    type Output = Int;

    fn neg(self) -> Int {
        Int::neg(self)
    }
}

impl std::ops::Neg for Int {
    type Output = Int;

    fn neg(self) -> Int {
        Int::neg(&self)
    }
}

impl std::ops::Not for &Int {
    type Output = Int;

    fn not(self) -> Int {
        self.invert()
    }
}

impl std::ops::Not for Int {
    type Output = Int;

    fn not(self) -> Int {
        self.invert()
    }
}
