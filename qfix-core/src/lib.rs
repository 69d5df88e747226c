//! # qfix-core
//!
//! Shared contract for the qfix fixed-point engines.
//!
//! This crate defines:
//! - [`QFormat`]: the Q(i, f) precision tag and the output-format algebra
//!   every arithmetic operation obeys
//! - [`FixedNum`]: the operation set implemented by both the word-granular
//!   engine (`qfix-word`) and the bit-granular reference engine (`qfix-bit`)
//! - [`FixError`]: the error type shared by both engines

pub mod error;
pub mod fixed_num;
pub mod format;

pub use error::FixError;
pub use fixed_num::FixedNum;
pub use format::QFormat;
