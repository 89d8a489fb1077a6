//! Settings spread over several consecutive registers.

use crate::{RegisterError, RegisterResult};

/// `N` raw bytes written to `base`, `base + 1`, ..., read together as one
/// big-endian integer.
///
/// The most-significant byte sits at the lowest address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterArea<const N: usize> {
    base: u8,
    bytes: [u8; N],
}

impl<const N: usize> RegisterArea<N> {
    const SPAN: () = assert!(N >= 1 && N <= 8, "a register area spans 1 to 8 registers");

    /// Area starting at `base` holding the power-on `defaults`.
    ///
    /// Called from a `const`, an area running past address `0xFF` fails the build.
    pub const fn new(base: u8, defaults: [u8; N]) -> Self {
        let () = Self::SPAN;
        assert!(
            base as usize + N - 1 <= u8::MAX as usize,
            "register area runs past address 0xFF"
        );

        Self {
            base,
            bytes: defaults,
        }
    }

    pub const fn base(&self) -> u8 {
        self.base
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub const fn bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    pub fn contains(&self, address: u8) -> bool {
        address >= self.base && usize::from(address - self.base) < N
    }

    pub fn byte(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    pub fn set_byte(&mut self, index: usize, value: u8) -> RegisterResult<()> {
        let slot = self
            .bytes
            .get_mut(index)
            .ok_or(RegisterError::IndexOutOfRange { index, len: N })?;
        *slot = value;
        Ok(())
    }

    /// The byte living at register `address`.
    pub fn at(&self, address: u8) -> Option<u8> {
        if !self.contains(address) {
            return None;
        }
        self.byte(usize::from(address - self.base))
    }

    /// Sets the byte living at register `address`.
    pub fn set_at(&mut self, address: u8, value: u8) -> RegisterResult<()> {
        if !self.contains(address) {
            return Err(RegisterError::UnknownAddress(address));
        }
        self.set_byte(usize::from(address - self.base), value)
    }

    /// The area as one big-endian integer.
    pub fn word(&self) -> u64 {
        let mut buffer = [0u8; 8];
        buffer[8 - N..].copy_from_slice(&self.bytes);
        u64::from_be_bytes(buffer)
    }

    /// Splits `word` big-endian across the area.
    ///
    /// Bits above `8 * N` are discarded, the same way the chip drops them.
    pub fn set_word(&mut self, word: u64) {
        let buffer = word.to_be_bytes();
        let (discarded, kept) = buffer.split_at(8 - N);

        if discarded.iter().any(|&byte| byte != 0) {
            tracing::debug!(
                base = self.base,
                word,
                "register area word wider than the area, high bits discarded"
            );
        }

        self.bytes.copy_from_slice(kept);
        tracing::trace!(base = self.base, bytes = ?self.bytes, "register area updated");
    }

    /// `(address, value)` pairs, lowest address first.
    pub fn pack(&self) -> [(u8, u8); N] {
        core::array::from_fn(|index| (self.base + index as u8, self.bytes[index]))
    }
}

/// `round(quantity / step)`, to the nearest integer with ties rounded up.
///
/// Negative, NaN and infinite ratios (including a zero `step`) fail with
/// [`RegisterError::InvalidQuantity`]. Ratios beyond `u64::MAX` saturate.
pub fn round_steps(quantity: f64, step: f64) -> RegisterResult<u64> {
    let steps = quantity / step;
    if !steps.is_finite() || steps < 0.0 {
        return Err(RegisterError::InvalidQuantity);
    }

    let whole = steps as u64;
    if steps - whole as f64 >= 0.5 {
        Ok(whole.saturating_add(1))
    } else {
        Ok(whole)
    }
}
