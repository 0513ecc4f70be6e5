//! Loadout string layout: header fields and per-node field widths.
//!
//! ```text
//! [version:8][spec_id:16][tree_hash:16x8]   header
//! per non-free node, in canonical order:
//!   [selected:1]
//!   if selected:
//!     [partial:1] [ranks:6 if partial]
//!     [choice:1]  [entry_index:2 if choice]
//! ```

use bitstream::{BitReader, BitWriter};
use schema::SpecId;

use crate::error::CodecResult;

/// Current loadout format version.
pub const LOADOUT_VERSION: u8 = 1;

/// Width of the version field.
pub const VERSION_BITS: u8 = 8;

/// Width of the spec id field.
pub const SPEC_ID_BITS: u8 = 16;

/// Number of 8-bit fields in the reserved tree-hash block.
pub const TREE_HASH_BYTES: usize = 16;

/// Width of each tree-hash field.
pub const TREE_HASH_FIELD_BITS: u8 = 8;

/// Width of the rank count written for partially ranked nodes.
pub const RANK_BITS: u8 = 6;

/// Width of the entry index written for choice nodes.
pub const CHOICE_INDEX_BITS: u8 = 2;

/// Total header size in bits.
pub const HEADER_BITS: usize = VERSION_BITS as usize
    + SPEC_ID_BITS as usize
    + TREE_HASH_BYTES * TREE_HASH_FIELD_BITS as usize;

/// Largest node block: selected, partial, ranks, choice, entry index.
pub(crate) const MAX_NODE_BITS: usize = 1 + 1 + RANK_BITS as usize + 1 + CHOICE_INDEX_BITS as usize;

/// Decoded loadout header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LoadoutHeader {
    /// Format version, [`LOADOUT_VERSION`] when written by this crate.
    pub version: u8,
    /// Specialization the loadout was built for.
    pub spec_id: SpecId,
    /// Reserved block; written as zeros, carried through unchecked when read.
    pub tree_hash: [u8; TREE_HASH_BYTES],
}

impl LoadoutHeader {
    /// Header for the current version with a zeroed tree hash.
    #[must_use]
    pub const fn new(spec_id: SpecId) -> Self {
        Self {
            version: LOADOUT_VERSION,
            spec_id,
            tree_hash: [0; TREE_HASH_BYTES],
        }
    }

    /// Returns `true` if the reserved block is all zeros.
    #[must_use]
    pub fn has_empty_tree_hash(&self) -> bool {
        self.tree_hash.iter().all(|&byte| byte == 0)
    }
}

pub(crate) fn write_header(writer: &mut BitWriter, header: &LoadoutHeader) -> CodecResult<()> {
    writer.write_bits(u32::from(header.version), VERSION_BITS)?;
    writer.write_bits(u32::from(header.spec_id.raw()), SPEC_ID_BITS)?;
    for &byte in &header.tree_hash {
        writer.write_bits(u32::from(byte), TREE_HASH_FIELD_BITS)?;
    }
    Ok(())
}

pub(crate) fn read_header(reader: &mut BitReader) -> CodecResult<LoadoutHeader> {
    // Widths bound every value, so the narrowing casts are lossless.
    let version = reader.read_bits(VERSION_BITS)? as u8;
    let spec_id = SpecId::new(reader.read_bits(SPEC_ID_BITS)? as u16);
    let mut tree_hash = [0u8; TREE_HASH_BYTES];
    for byte in &mut tree_hash {
        *byte = reader.read_bits(TREE_HASH_FIELD_BITS)? as u8;
    }
    Ok(LoadoutHeader {
        version,
        spec_id,
        tree_hash,
    })
}

/// Number of symbols needed for a schema with `nodes` non-free nodes, at most.
pub(crate) fn max_symbols(nodes: usize) -> usize {
    (HEADER_BITS + nodes * MAX_NODE_BITS).div_ceil(bitstream::SYMBOL_BITS as usize)
}
