//! # qfix
//!
//! Arbitrary-precision signed fixed-point arithmetic for Q(i, f) values:
//! two's-complement integers of runtime width i+f, denoting `V · 2^(-f)`.
//! Addition and subtraction grow the result by one integer bit, products by
//! the sum of widths minus one, so no operation can overflow; precision
//! changes are explicit (`extend_lsbs`, `remove_msbs`, `reinterpret`, …).
//!
//! Two peer engines implement the same [`FixedNum`] contract:
//! - [`WordFix`] (`qfix-word`): 32-bit limbs with add-with-carry, the
//!   production path
//! - [`BitFix`] (`qfix-bit`): one bool per bit, the slow oracle the
//!   differential tests compare against
//!
//! There is no division and no float conversion; iterative consumers build
//! those on top (see the `demos/` binaries for 1/x and √c).

pub use qfix_bit::BitFix;
pub use qfix_core::{FixError, FixedNum, QFormat};
pub use qfix_word::WordFix;
