//! # qfix-bit
//!
//! The reference fixed-point engine: one `bool` per bit, school algorithms
//! spelled out literally. Much slower than `qfix-word` and much harder to
//! get wrong; the differential tests treat this engine as the oracle.
//!
//! Also home of the decimal exporter, which only needs cheap reinterprets
//! and additions.

pub mod codec;
pub mod ops;
pub mod resize;
pub mod value;

pub use value::BitFix;
