//! The fixed 64-symbol output alphabet.

/// Number of bits carried by one symbol.
pub const SYMBOL_BITS: u8 = 6;

/// Symbol alphabet, indexed by 6-bit value.
///
/// The order is part of the wire format and must never change.
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Marks bytes that are not part of the alphabet in [`INVERSE`].
const INVALID: u8 = 0xFF;

/// Inverse lookup table: ASCII byte to symbol value.
const INVERSE: [u8; 128] = build_inverse();

const fn build_inverse() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns the character for a 6-bit symbol value.
///
/// Only the low six bits of `value` are used.
#[must_use]
pub const fn symbol_char(value: u8) -> char {
    ALPHABET[(value & 0x3F) as usize] as char
}

/// Returns the 6-bit value of `ch`, or `None` if `ch` is outside the alphabet.
#[must_use]
pub fn symbol_value(ch: char) -> Option<u8> {
    let code = u32::from(ch);
    if code >= 128 {
        return None;
    }
    match INVERSE[code as usize] {
        INVALID => None,
        value => Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_order() {
        assert_eq!(symbol_char(0), 'A');
        assert_eq!(symbol_char(13), 'N');
        assert_eq!(symbol_char(25), 'Z');
        assert_eq!(symbol_char(26), 'a');
        assert_eq!(symbol_char(51), 'z');
        assert_eq!(symbol_char(52), '0');
        assert_eq!(symbol_char(61), '9');
        assert_eq!(symbol_char(62), '+');
        assert_eq!(symbol_char(63), '/');
    }

    #[test]
    fn inverse_matches_forward() {
        for value in 0..64u8 {
            assert_eq!(symbol_value(symbol_char(value)), Some(value));
        }
    }

    #[test]
    fn rejects_foreign_characters() {
        for ch in ['#', '=', '-', '_', ' ', '\n', 'é', '\u{1F600}'] {
            assert_eq!(symbol_value(ch), None, "{ch:?} should not decode");
        }
    }

    #[test]
    fn symbol_char_masks_high_bits() {
        assert_eq!(symbol_char(64), 'A');
        assert_eq!(symbol_char(0xFF), '/');
    }
}
