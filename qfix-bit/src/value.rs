use qfix_core::{FixError, QFormat};
use rand::Rng;

/// Bit-granular signed fixed-point value.
///
/// Exactly `width()` booleans, LSB at index 0; the last element is the sign
/// bit. There are no slack bits, so the stored sequence *is* the
/// two's-complement integer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BitFix {
    pub(crate) fmt: QFormat,
    pub(crate) bits: Vec<bool>,
}

impl BitFix {
    /// Create a zero value with the given precision. A non-positive total
    /// width yields the empty placeholder.
    pub fn new(int_bits: i32, frac_bits: i32) -> Self {
        let fmt = QFormat::new(int_bits, frac_bits);
        let w = fmt.width().max(0) as usize;
        BitFix {
            fmt,
            bits: vec![false; w],
        }
    }

    pub fn format(&self) -> QFormat {
        self.fmt
    }

    pub fn int_bits(&self) -> i32 {
        self.fmt.int_bits
    }

    pub fn frac_bits(&self) -> i32 {
        self.fmt.frac_bits
    }

    pub fn width(&self) -> i32 {
        self.fmt.width()
    }

    /// Raw bit write. Debug and fuzzing only.
    pub fn set_bit(&mut self, idx: usize, value: bool) {
        self.bits[idx] = value;
    }

    /// Raw bit read.
    pub fn bit(&self, idx: usize) -> bool {
        self.bits[idx]
    }

    /// Sign bit (the last element); the empty placeholder is non-negative.
    pub fn is_negative(&self) -> bool {
        self.bits.last().copied().unwrap_or(false)
    }

    /// Storage invariant: exactly `width()` bits are held.
    pub fn is_canonical(&self) -> bool {
        self.bits.len() == self.fmt.width().max(0) as usize
    }

    /// Relabel without validation; the caller guarantees the width matches.
    pub(crate) fn relabeled(&self, int_bits: i32, frac_bits: i32) -> BitFix {
        debug_assert_eq!(int_bits + frac_bits, self.fmt.width());
        BitFix {
            fmt: QFormat::new(int_bits, frac_bits),
            bits: self.bits.clone(),
        }
    }

    /// Fill every bit from `rng`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for bit in &mut self.bits {
            *bit = rng.gen();
        }
    }

    /// Copy the bits of a value with identical precision.
    pub fn copy_from(&mut self, other: &BitFix) -> Result<(), FixError> {
        if self.fmt != other.fmt {
            return Err(FixError::FormatMismatch {
                expected: self.fmt,
                got: other.fmt,
            });
        }
        self.bits.copy_from_slice(&other.bits);
        Ok(())
    }
}
