//! Bit-level reader with bounded operations.

use crate::alphabet::{symbol_value, SYMBOL_BITS};
use crate::error::{BitError, BitResult};
use crate::writer::MAX_FIELD_BITS;

/// A bit-level reader for decoding a 6-bit symbol string.
///
/// Symbols are validated when the reader is constructed; afterwards all read
/// operations are bounds-checked and return errors on failure. The reader
/// never panics on malformed input.
///
/// Padding bits in the final symbol are indistinguishable from data, so they
/// count as readable. Callers must know the exact sequence of field widths.
#[derive(Debug, Clone)]
pub struct BitReader {
    symbols: Vec<u8>,
    bit_pos: usize,
}

impl BitReader {
    /// Creates a new `BitReader` from a symbol string.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidSymbol`] for the first character outside the
    /// alphabet.
    pub fn new(input: &str) -> BitResult<Self> {
        let symbols = input
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                symbol_value(symbol).ok_or(BitError::InvalidSymbol { symbol, position })
            })
            .collect::<BitResult<Vec<u8>>>()?;
        Ok(Self {
            symbols,
            bit_pos: 0,
        })
    }

    /// Returns the total number of bits carried by the input, padding included.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.symbols.len() * SYMBOL_BITS as usize
    }

    /// Returns the number of bits remaining to read.
    #[must_use]
    pub fn bits_remaining(&self) -> usize {
        self.bit_len().saturating_sub(self.bit_pos)
    }

    /// Returns `true` if there are no more bits to read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits_remaining() == 0
    }

    /// Returns the current bit position.
    #[must_use]
    pub const fn bit_position(&self) -> usize {
        self.bit_pos
    }

    /// Reads a single bit as a boolean.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::UnexpectedEof`] if no bits remain.
    pub fn read_bool(&mut self) -> BitResult<bool> {
        self.ensure_bits(1)?;
        Ok(self.take_bit())
    }

    /// Reads a `bits`-wide field, least significant bit first.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidBitCount`] if `bits` is zero or above 32.
    /// Returns [`BitError::UnexpectedEof`] if fewer than `bits` bits remain.
    /// Nothing is consumed when an error is returned.
    pub fn read_bits(&mut self, bits: u8) -> BitResult<u32> {
        if bits == 0 || bits > MAX_FIELD_BITS {
            return Err(BitError::InvalidBitCount {
                bits,
                max_bits: MAX_FIELD_BITS,
            });
        }
        self.ensure_bits(bits as usize)?;

        let mut value = 0u32;
        for i in 0..bits {
            value |= u32::from(self.take_bit()) << i;
        }
        Ok(value)
    }

    fn ensure_bits(&self, bits: usize) -> BitResult<()> {
        let available = self.bits_remaining();
        if bits > available {
            return Err(BitError::UnexpectedEof {
                requested: bits,
                available,
            });
        }
        Ok(())
    }

    fn take_bit(&mut self) -> bool {
        let symbol = self.symbols[self.bit_pos / SYMBOL_BITS as usize];
        let shift = self.bit_pos % SYMBOL_BITS as usize;
        self.bit_pos += 1;
        (symbol >> shift) & 1 == 1
    }
}
