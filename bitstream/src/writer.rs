//! Bit-level writer producing a 6-bit symbol string.

use crate::alphabet::{symbol_char, SYMBOL_BITS};
use crate::error::{BitError, BitResult};

/// Widest field accepted by [`BitWriter::write_bits`].
pub const MAX_FIELD_BITS: u8 = 32;

/// A bit-level writer that packs fields LSB-first into 6-bit symbols.
///
/// The low bits of each value fill the remaining space of the current symbol
/// before spilling into the next one. Completed symbols are mapped through
/// the alphabet immediately. Call [`finish`](Self::finish) to get the string.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// Completed symbols, already mapped to characters.
    out: String,
    /// Symbol being filled (not yet pushed to `out`).
    current: u8,
    /// Number of bits filled in `current` (0-5).
    bit_count: u8,
}

impl BitWriter {
    /// Creates a new empty `BitWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `BitWriter` with room for `symbols` output characters.
    #[must_use]
    pub fn with_capacity(symbols: usize) -> Self {
        Self {
            out: String::with_capacity(symbols),
            current: 0,
            bit_count: 0,
        }
    }

    /// Returns the number of bits written so far.
    #[must_use]
    pub fn bits_written(&self) -> usize {
        self.out.len() * SYMBOL_BITS as usize + self.bit_count as usize
    }

    /// Writes a single bit.
    pub fn write_bool(&mut self, value: bool) {
        self.current |= u8::from(value) << self.bit_count;
        self.bit_count += 1;
        if self.bit_count == SYMBOL_BITS {
            self.out.push(symbol_char(self.current));
            self.current = 0;
            self.bit_count = 0;
        }
    }

    /// Writes the low `bits` bits of `value`, least significant bit first.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidBitCount`] if `bits` is zero or above 32.
    /// Returns [`BitError::ValueOutOfRange`] if `value` doesn't fit in `bits`.
    /// Nothing is written when an error is returned.
    pub fn write_bits(&mut self, value: u32, bits: u8) -> BitResult<()> {
        if bits == 0 || bits > MAX_FIELD_BITS {
            return Err(BitError::InvalidBitCount {
                bits,
                max_bits: MAX_FIELD_BITS,
            });
        }
        if bits < 32 && value >= (1u32 << bits) {
            return Err(BitError::ValueOutOfRange { value, bits });
        }

        for i in 0..bits {
            self.write_bool((value >> i) & 1 == 1);
        }
        Ok(())
    }

    /// Finishes writing and returns the symbol string.
    ///
    /// If the last symbol is incomplete, its unused high bits are zero.
    #[must_use]
    pub fn finish(mut self) -> String {
        self.flush_partial();
        self.out
    }

    /// Finishes writing and appends the symbols to the provided buffer.
    pub fn finish_into(mut self, buf: &mut String) {
        self.flush_partial();
        buf.push_str(&self.out);
    }

    fn flush_partial(&mut self) {
        if self.bit_count > 0 {
            self.out.push(symbol_char(self.current));
            self.current = 0;
            self.bit_count = 0;
        }
    }
}
