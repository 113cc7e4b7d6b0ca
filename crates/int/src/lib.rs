//! Integer arithmetic with Python `int` semantics.
//!
//! A single [`Int`] value type backs every operation, holding small values
//! in a native 64-bit word and spilling into arbitrary precision only when
//! a result genuinely does not fit. On top of the representation sit the
//! operator engines:
//!
//! - arithmetic with silent promotion on word overflow
//! - floor division and modulo, where the remainder takes the divisor's
//!   sign
//! - exponentiation with an optional modulus and a float fallback for
//!   negative exponents
//! - a total order and a hash that cannot tell the two representations
//!   apart
//! - two's-complement byte encoding and decoding in either byte order
//!
//! Operations either succeed, fail with a typed [`IntError`], or — at the
//! [`ops::dispatch`] boundary — answer `NotImplemented` so an outer
//! operator-dispatch layer can negotiate a reflected call.
//!
//! Every operation is a pure function over immutable values; there is no
//! shared state and no operation blocks.
//!
//! ```
//! use vesta_int::{ByteOrder, Int};
//!
//! let word = Int::new(i64::MAX);
//! let promoted = word.add(&Int::new(1));
//! assert_eq!(promoted.to_string(), "9223372036854775808");
//!
//! assert_eq!(Int::new(-7).floor_div(&Int::new(2)).unwrap(), Int::new(-4));
//! assert_eq!(Int::new(-7).modulo(&Int::new(2)).unwrap(), Int::new(1));
//!
//! let encoded = Int::new(255).to_bytes(1, ByteOrder::Big, false).unwrap();
//! assert_eq!(encoded, vec![0xFF]);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::all)]

pub mod bytes;
pub mod core;
pub mod ops;

// Re-export the crate surface.
pub use crate::bytes::{ByteOrder, ByteSource};
pub use crate::core::{ForeignNumeric, Int, IntError, IntResult};
pub use crate::ops::{OpResult, Operand, Raised};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{ByteOrder, ForeignNumeric, Int, IntError, IntResult, OpResult, Operand, Raised};
}
