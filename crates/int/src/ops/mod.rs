//! Operator surface: arithmetic, shifts, division, power, dispatch.

pub mod arith;
pub mod dispatch;
pub mod divmod;
pub mod pow;
pub mod shift;

pub use dispatch::{OpResult, Operand};
pub use pow::Raised;
