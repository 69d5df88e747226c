use crate::error::FixError;
use crate::format::QFormat;

/// The operation set shared by the word engine and the bit-level reference
/// engine.
///
/// Both engines represent the same abstract value (a two's-complement
/// integer tagged with a [`QFormat`]) and every operation produces its
/// result in the format given by the Q-format algebra, so a differential
/// test can drive either implementation through one generic call site and
/// compare hex exports.
///
/// Determinism: no method draws randomness. Fuzzing helpers on the concrete
/// types take the PRNG as an argument so tests stay reproducible.
pub trait FixedNum: Sized + Clone + PartialEq {
    /// Create a zero value of the given precision.
    ///
    /// `int_bits + frac_bits` must be positive for a populated value; a
    /// non-positive width yields the empty placeholder.
    fn new(int_bits: i32, frac_bits: i32) -> Self;

    fn format(&self) -> QFormat;

    fn int_bits(&self) -> i32 {
        self.format().int_bits
    }

    fn frac_bits(&self) -> i32 {
        self.format().frac_bits
    }

    fn width(&self) -> i32 {
        self.format().width()
    }

    /// Sign bit (bit `width() - 1`).
    fn is_negative(&self) -> bool;

    /// Storage invariant check: correct length, and for limb storage the
    /// slack bits above the sign bit all mirror it.
    fn is_canonical(&self) -> bool;

    /// Two's-complement negation at unchanged precision.
    fn negated(&self) -> Self;

    /// Sum in Q(max(i)+1, max(f)); operands are LSB-equalised internally.
    fn add(&self, rhs: &Self) -> Self;

    /// Difference in Q(max(i)+1, max(f)).
    fn sub(&self, rhs: &Self) -> Self;

    /// Product in Q(i₁+i₂−1, f₁+f₂).
    fn mul(&self, rhs: &Self) -> Self;

    /// Append `bits` zero fractional bits (multiply the integer image by
    /// 2^bits, value preserved).
    fn extend_lsbs(&self, bits: u32) -> Self;

    /// Widen by `bits` sign-extended integer bits (value preserved).
    fn extend_msbs(&self, bits: u32) -> Self;

    /// Drop the `bits` lowest fractional bits. Truncation toward −∞
    /// (arithmetic shift); no rounding.
    fn remove_lsbs(&self, bits: u32) -> Self;

    /// Drop the `bits` highest integer bits.
    fn remove_msbs(&self, bits: u32) -> Self;

    /// Relabel the precision without touching the stored bits, scaling the
    /// denoted value by a power of two. The total width must not change.
    fn reinterpret(&self, int_bits: i32, frac_bits: i32) -> Result<Self, FixError>;

    /// Add (or subtract) `2^power` in place at unchanged precision.
    ///
    /// Returns `false` without mutating when the bit falls outside the
    /// format.
    fn add_power_of_two(&mut self, power: i32, negative: bool) -> bool;

    /// Smallest integer-bit count that still represents this value with the
    /// fractional bits untouched. At least two bits (sign plus one magnitude
    /// bit) are always kept.
    fn min_int_bits(&self) -> i32;

    /// Import from hex, nibbles consumed right to left, 4 bits LSB-first
    /// each. Stops at the storage capacity; fails without mutation on a
    /// non-hex character.
    fn set_from_hex(&mut self, hex: &str) -> Result<(), FixError>;

    /// Import from a binary string, MSB first; `'1'` sets a bit, any other
    /// character clears it. Excess high-order characters are ignored.
    fn set_from_bin(&mut self, bin: &str);

    /// Hex export: eight zero-padded characters per 32-bit limb, most
    /// significant limb first. Sign bits above the top data bit appear
    /// verbatim, so negative values lead with `f`s.
    fn to_hex(&self) -> String;

    /// Binary export: `width()` characters, MSB first.
    fn to_bin(&self) -> String;
}
