use qfix_core::{FixError, QFormat};
use rand::Rng;

/// Word-granular signed fixed-point value.
///
/// Storage is a little-endian `Vec` of 32-bit limbs holding a `width()`-bit
/// two's-complement integer; limb 0 carries the least significant bits,
/// including everything below the binary point. Bits of the top limb at
/// positions `width()` and above are slack and always mirror the sign bit
/// (canonical form). Arithmetic returns new values sized by the Q-format
/// rules; the limb count is a runtime quantity, never a type parameter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordFix {
    pub(crate) fmt: QFormat,
    pub(crate) limbs: Vec<u32>,
}

impl WordFix {
    /// Create a zero value with the given precision. A non-positive total
    /// width yields the empty placeholder.
    pub fn new(int_bits: i32, frac_bits: i32) -> Self {
        let fmt = QFormat::new(int_bits, frac_bits);
        WordFix {
            fmt,
            limbs: vec![0; fmt.limb_count()],
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

    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    /// Raw limb write, no canonical repair. Debug and fuzzing only.
    pub fn set_limb(&mut self, idx: usize, value: u32) {
        self.limbs[idx] = value;
    }

    /// Raw limb read.
    pub fn limb(&self, idx: usize) -> u32 {
        self.limbs[idx]
    }

    /// Sign bit (bit `width() - 1`).
    pub fn is_negative(&self) -> bool {
        if self.limbs.is_empty() {
            return false;
        }
        let top = (self.fmt.width() - 1) as usize;
        (self.limbs[top / 32] >> (top % 32)) & 1 == 1
    }

    /// Canonical-form check: every bit of the top limb from the sign-bit
    /// position through bit 31 is identical.
    pub fn is_canonical(&self) -> bool {
        let w = self.fmt.width();
        if w <= 0 {
            return self.limbs.is_empty();
        }
        if self.limbs.len() != self.fmt.limb_count() {
            return false;
        }
        let used = ((w - 1) % 32) as u32 + 1;
        if used == 32 {
            return true;
        }
        let slack = self.limbs[self.limbs.len() - 1] & (!0u32 << used);
        if self.is_negative() {
            slack == !0u32 << used
        } else {
            slack == 0
        }
    }

    /// Single bit read; `idx` must be below the limb capacity.
    pub(crate) fn bit(&self, idx: usize) -> bool {
        (self.limbs[idx / 32] >> (idx % 32)) & 1 == 1
    }

    /// Force the slack bits of the top limb to the sign bit.
    pub(crate) fn normalize(&mut self) {
        let w = self.fmt.width();
        if w <= 0 {
            return;
        }
        let used = ((w - 1) % 32) as u32 + 1;
        if used == 32 {
            return;
        }
        let neg = self.is_negative();
        let last = self.limbs.len() - 1;
        let live = (1u32 << used) - 1;
        if neg {
            self.limbs[last] |= !live;
        } else {
            self.limbs[last] &= live;
        }
    }

    /// Sign-extension word: all ones for negative values, zero otherwise.
    pub(crate) fn sign_word(&self) -> u32 {
        if self.is_negative() {
            u32::MAX
        } else {
            0
        }
    }

    /// Limb read with the slack bits cleared. Unsigned helpers use this so
    /// the top limb contributes only data bits.
    pub(crate) fn limb_masked(&self, idx: usize) -> u32 {
        let v = self.limbs[idx];
        let used = ((self.fmt.width() - 1) % 32) as u32 + 1;
        if idx + 1 == self.limbs.len() && used < 32 {
            v & ((1u32 << used) - 1)
        } else {
            v
        }
    }

    /// Fill every limb from `rng`, then restore canonical form.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for limb in &mut self.limbs {
            *limb = rng.gen();
        }
        self.normalize();
    }

    /// Copy the limbs of a value with identical precision.
    pub fn copy_from(&mut self, other: &WordFix) -> Result<(), FixError> {
        if self.fmt != other.fmt {
            return Err(FixError::FormatMismatch {
                expected: self.fmt,
                got: other.fmt,
            });
        }
        self.limbs.copy_from_slice(&other.limbs);
        Ok(())
    }
}
