//! # qfix-word
//!
//! The production fixed-point engine: values are little-endian sequences of
//! 32-bit limbs holding a two's-complement integer tagged with a
//! [`qfix_core::QFormat`]. All arithmetic runs limb-at-a-time on an
//! add-with-carry primitive; output precisions follow the Q-format algebra.
//!
//! Correctness of this engine is established differentially against the
//! bit-granular oracle in `qfix-bit`.

pub mod codec;
pub mod ops;
pub mod resize;
pub mod value;

pub use value::WordFix;
