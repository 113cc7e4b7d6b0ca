//! The negotiation protocol with the caller's operator dispatch.
//!
//! The engine itself only understands integers (and booleans, which Python
//! arithmetic treats as 0/1). A dispatch layer routing `a + b` may hold
//! operands the engine cannot interpret; these entry points answer with
//! [`OpResult::NotImplemented`] instead of an error so the layer can try
//! the reflected operation or raise its own type error. `NotImplemented`
//! is a sentinel, never a failure.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::bytes::ByteOrder;
use crate::core::cmp::ForeignNumeric;
use crate::core::error::{IntError, IntResult};
use crate::core::int::Int;
use crate::ops::pow::Raised;

/// An operand as seen by the dispatch layer.
#[derive(Clone, Copy)]
pub enum Operand<'a> {
    /// A value the engine owns outright.
    Int(&'a Int),
    /// Booleans participate in integer arithmetic as 0 and 1.
    Bool(bool),
    /// An externally-owned numeric handle; only equality understands it.
    Foreign(&'a dyn ForeignNumeric),
    /// Anything else. Every operation answers `NotImplemented`.
    Other,
}

impl<'a> Operand<'a> {
    /// Coerce to an integer view, if this operand has one.
    fn as_int(self) -> Option<Cow<'a, Int>> {
        match self {
            Self::Int(value) => Some(Cow::Borrowed(value)),
            Self::Bool(value) => Some(Cow::Owned(Int::from(value))),
            Self::Foreign(_) | Self::Other => None,
        }
    }
}

/// Three-way outcome of a dispatched operation: a value, a failure, or the
/// not-implemented sentinel.
#[derive(Debug, Clone, PartialEq)]
pub enum OpResult<T> {
    /// The operation produced a value.
    Ok(T),
    /// The operation failed; see [`IntError`].
    Err(IntError),
    /// Operand types the engine does not support. The caller should try a
    /// reflected operation or raise its own error.
    NotImplemented,
}

impl<T> OpResult<T> {
    /// The value, if the operation produced one.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) | Self::NotImplemented => None,
        }
    }

    /// True iff this is the not-implemented sentinel.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented)
    }

    /// Map the carried value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OpResult<U> {
        match self {
            Self::Ok(value) => OpResult::Ok(f(value)),
            Self::Err(e) => OpResult::Err(e),
            Self::NotImplemented => OpResult::NotImplemented,
        }
    }
}

impl<T> From<IntResult<T>> for OpResult<T> {
    fn from(result: IntResult<T>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(e) => Self::Err(e),
        }
    }
}

macro_rules! infallible_binary {
    { $($(#[$doc:meta])* $name:ident;)* } => {
        $(
            $(#[$doc])*
            pub fn $name(lhs: Operand<'_>, rhs: Operand<'_>) -> OpResult<Int> {
                match (lhs.as_int(), rhs.as_int()) {
                    (Some(a), Some(b)) => OpResult::Ok(a.$name(&b)),
                    _ => OpResult::NotImplemented,
                }
            }
        )*
    };
}

macro_rules! fallible_binary {
    { $($(#[$doc:meta])* $name:ident -> $out:ty;)* } => {
        $(
            $(#[$doc])*
            pub fn $name(lhs: Operand<'_>, rhs: Operand<'_>) -> OpResult<$out> {
                match (lhs.as_int(), rhs.as_int()) {
                    (Some(a), Some(b)) => a.$name(&b).into(),
                    _ => OpResult::NotImplemented,
                }
            }
        )*
    };
}

infallible_binary! {
    /// Dispatched `lhs + rhs`.
    add;
    /// Dispatched `lhs - rhs`.
    sub;
    /// Dispatched `lhs * rhs`.
    mul;
    /// Dispatched `lhs & rhs`.
    bit_and;
    /// Dispatched `lhs | rhs`.
    bit_or;
    /// Dispatched `lhs ^ rhs`.
    bit_xor;
}

fallible_binary! {
    /// Dispatched `lhs // rhs`.
    floor_div -> Int;
    /// Dispatched `lhs % rhs`.
    modulo -> Int;
    /// Dispatched `divmod(lhs, rhs)`.
    divmod -> (Int, Int);
    /// Dispatched `lhs / rhs`.
    true_div -> f64;
    /// Dispatched `lhs << rhs`.
    shl -> Int;
    /// Dispatched `lhs >> rhs`.
    shr -> Int;
}

/// Dispatched `pow(base, exponent)` / `pow(base, exponent, modulus)`.
pub fn pow(base: Operand<'_>, exponent: Operand<'_>, modulus: Option<Operand<'_>>) -> OpResult<Raised> {
    let (Some(base), Some(exponent)) = (base.as_int(), exponent.as_int()) else {
        return OpResult::NotImplemented;
    };
    match modulus {
        None => base.pow(&exponent, None).into(),
        Some(m) => match m.as_int() {
            Some(m) => base.pow(&exponent, Some(&m)).into(),
            None => OpResult::NotImplemented,
        },
    }
}

/// Dispatched equality. Foreign handles compare as unsigned words against
/// integer operands; every other pairing involving them is unsupported.
pub fn eq(lhs: Operand<'_>, rhs: Operand<'_>) -> OpResult<bool> {
    match (lhs, rhs) {
        (Operand::Foreign(handle), other) | (other, Operand::Foreign(handle)) => {
            match other.as_int() {
                Some(value) => OpResult::Ok(value.eq_foreign(handle)),
                None => OpResult::NotImplemented,
            }
        }
        _ => match (lhs.as_int(), rhs.as_int()) {
            (Some(a), Some(b)) => OpResult::Ok(a == b),
            _ => OpResult::NotImplemented,
        },
    }
}

/// Dispatched ordering for the rich comparisons.
pub fn cmp(lhs: Operand<'_>, rhs: Operand<'_>) -> OpResult<Ordering> {
    match (lhs.as_int(), rhs.as_int()) {
        (Some(a), Some(b)) => OpResult::Ok(a.cmp(&b)),
        _ => OpResult::NotImplemented,
    }
}

/// Dispatched `to_bytes` with an integer-like length operand.
///
/// The length is normalized first — rejecting negatives, then narrowing to
/// the platform size — and the core implementation does the rest.
pub fn to_bytes(
    value: &Int,
    length: Operand<'_>,
    order: ByteOrder,
    signed: bool,
) -> OpResult<Vec<u8>> {
    let Some(length) = length.as_int() else {
        return OpResult::NotImplemented;
    };
    if length.is_negative() {
        return OpResult::Err(IntError::NegativeLength);
    }
    let Some(count) = length.to_u64().and_then(|c| usize::try_from(c).ok()) else {
        return OpResult::Err(IntError::TooBigToConvert);
    };
    value.to_bytes(count, order, signed).into()
}
