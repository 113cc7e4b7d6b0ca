//! Two's-complement byte serialization.
//!
//! `to_bytes` produces exactly the requested number of bytes or refuses;
//! `from_bytes` accepts any ordered byte sequence and cannot fail. The
//! word path writes its own little-endian encoding and the big path leans
//! on the minimal two's-complement buffer, padded or rejected to fit.

use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};
use tracing::trace;

use crate::core::error::{IntError, IntResult};
use crate::core::int::Int;

/// Which end of the encoding holds the most significant byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

/// An ordered, fixed-size sequence of bytes: flat buffers, growable
/// buffers, and anything else that can view itself as a slice.
pub trait ByteSource {
    /// The bytes, logical order as stored.
    fn as_bytes(&self) -> &[u8];
}

impl<T: AsRef<[u8]> + ?Sized> ByteSource for T {
    fn as_bytes(&self) -> &[u8] {
        self.as_ref()
    }
}

/// True iff `value` fits `length` bytes under the requested signedness.
fn word_fits(value: i64, length: usize, signed: bool) -> bool {
    if length >= 8 {
        return true;
    }
    if signed {
        if length == 0 {
            return value == 0;
        }
        let sign_bits = value >> (8 * length - 1);
        sign_bits == 0 || sign_bits == -1
    } else {
        // Negative unsigned was rejected earlier.
        value >> (8 * length) == 0
    }
}

impl Int {
    /// Encode into exactly `length` bytes.
    ///
    /// Unsigned encodings reject negative values with
    /// [`IntError::NegativeUnsigned`]; a value that does not fit —
    /// including any nonzero value with `length == 0` — is rejected with
    /// [`IntError::TooBigToConvert`].
    pub fn to_bytes(&self, length: usize, order: ByteOrder, signed: bool) -> IntResult<Vec<u8>> {
        if self.is_negative() && !signed {
            return Err(IntError::NegativeUnsigned);
        }
        let mut out = match self {
            Self::Word(value) => word_to_bytes(*value, length, signed)?,
            Self::Big(value) => big_to_bytes(value, length, signed)?,
        };
        if order == ByteOrder::Big {
            out.reverse();
        }
        Ok(out)
    }

    /// Decode an integer from a byte sequence.
    ///
    /// An empty source is zero. With `signed`, the most significant bit of
    /// the logical high-order byte extends the sign.
    pub fn from_bytes<S: ByteSource + ?Sized>(source: &S, order: ByteOrder, signed: bool) -> Int {
        let bytes = source.as_bytes();
        if bytes.is_empty() {
            return Int::Word(0);
        }
        let big = match (order, signed) {
            (ByteOrder::Big, true) => BigInt::from_signed_bytes_be(bytes),
            (ByteOrder::Big, false) => BigInt::from_bytes_be(Sign::Plus, bytes),
            (ByteOrder::Little, true) => BigInt::from_signed_bytes_le(bytes),
            (ByteOrder::Little, false) => BigInt::from_bytes_le(Sign::Plus, bytes),
        };
        Int::from_big(big)
    }

    /// Decode from a generic sequence of small integers, validating each
    /// element into `0..=255`.
    pub fn from_byte_iter<I>(source: I, order: ByteOrder, signed: bool) -> IntResult<Int>
    where
        I: IntoIterator<Item = i64>,
    {
        let bytes = source
            .into_iter()
            .map(|item| u8::try_from(item).map_err(|_| IntError::ByteOutOfRange))
            .collect::<IntResult<Vec<u8>>>()?;
        Ok(Self::from_bytes(&bytes, order, signed))
    }
}

/// Little-endian encoding of a word value, already known to carry a sign
/// bit only when `signed` allows one.
fn word_to_bytes(value: i64, length: usize, signed: bool) -> IntResult<Vec<u8>> {
    if !word_fits(value, length, signed) {
        trace!(value, length, signed, "value does not fit requested byte length");
        return Err(IntError::TooBigToConvert);
    }
    let sign_byte = if value < 0 { 0xFF } else { 0x00 };
    let le = value.to_le_bytes();
    Ok((0..length)
        .map(|i| if i < 8 { le[i] } else { sign_byte })
        .collect())
}

/// Little-endian encoding of a big value via its minimal two's-complement
/// buffer.
fn big_to_bytes(value: &BigInt, length: usize, signed: bool) -> IntResult<Vec<u8>> {
    if value.is_zero() {
        return Ok(vec![0; length]);
    }
    // Minimal representation, least significant byte first.
    let minimal = if signed {
        value.to_signed_bytes_le()
    } else {
        value.magnitude().to_bytes_le()
    };
    if minimal.len() > length {
        trace!(length, needed = minimal.len(), "value does not fit requested byte length");
        return Err(IntError::TooBigToConvert);
    }
    let sign_byte = if value.is_negative() { 0xFF } else { 0x00 };
    let mut out = minimal;
    out.resize(length, sign_byte);
    Ok(out)
}
