//! Low-level bit packing primitives for talent loadout strings.
//!
//! This crate provides [`BitWriter`] and [`BitReader`] for packing unsigned
//! fields of arbitrary width into a string of 6-bit symbols and back.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads/writes are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about talents, nodes, or schemas.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Wire Conventions
//!
//! Fields are packed least significant bit first. Each completed group of six
//! bits becomes one character of [`ALPHABET`]; a trailing partial group is
//! padded with zero bits in its high positions.
//!
//! # Example
//!
//! ```
//! use bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(5, 3).unwrap();
//! writer.write_bits(1, 2).unwrap();
//!
//! let symbols = writer.finish();
//! assert_eq!(symbols, "N");
//!
//! let mut reader = BitReader::new(&symbols).unwrap();
//! assert_eq!(reader.read_bits(3).unwrap(), 5);
//! assert_eq!(reader.read_bits(2).unwrap(), 1);
//! ```

mod alphabet;
mod error;
mod reader;
mod writer;

pub use alphabet::{symbol_char, symbol_value, ALPHABET, SYMBOL_BITS};
pub use error::{BitError, BitResult};
pub use reader::BitReader;
pub use writer::{BitWriter, MAX_FIELD_BITS};
