//! Talent loadout string encoding and decoding.
//!
//! This is the main codec crate that ties together bitstream and schema to
//! turn a player's talent selections into a compact loadout string and back.
//!
//! # Features
//!
//! - Encoding selections against a specialization's canonical node order
//! - Decoding strings back into selections (round-trip verification)
//! - Header-only decoding and schema lookup by spec id
//! - Bounded decoding via [`CodecLimits`]
//!
//! # Design Principles
//!
//! - **Byte-for-byte compatibility** - Field order and widths follow the external loadout format exactly.
//! - **All or nothing** - Errors abort the call; partial strings or selections are never returned.
//! - **Deterministic** - Same inputs produce same outputs.
//!
//! # Example
//!
//! ```
//! use codec::{decode_loadout, encode_loadout, LoadoutSelections, Selection};
//! use schema::{EntryId, NodeDef, NodeId, SpecId, TalentTreeSchema};
//!
//! let schema = TalentTreeSchema::builder(SpecId::new(62))
//!     .node(NodeDef::normal(NodeId::new(1), 2))
//!     .node(NodeDef::choice(NodeId::new(2), [EntryId::new(20), EntryId::new(21)]))
//!     .build()
//!     .unwrap();
//!
//! let selections = LoadoutSelections::from_selections([
//!     Selection::new(NodeId::new(1), 1),
//!     Selection::new(NodeId::new(2), 1).with_choice(EntryId::new(21)),
//! ])
//! .unwrap();
//!
//! let wire = encode_loadout(&schema, &selections).unwrap();
//! assert_eq!(decode_loadout(&schema, &wire).unwrap(), selections);
//! ```

mod decode;
mod encode;
mod error;
mod layout;
mod limits;
mod selection;

pub use decode::{
    decode_header, decode_loadout, decode_loadout_from_set, decode_loadout_with_limits,
    DecodedLoadout,
};
pub use encode::{encode_loadout, encode_loadout_with_limits};
pub use error::{CodecError, CodecResult, LimitKind, MismatchReason, NodeDataReason};
pub use layout::{
    LoadoutHeader, CHOICE_INDEX_BITS, HEADER_BITS, LOADOUT_VERSION, RANK_BITS, SPEC_ID_BITS,
    TREE_HASH_BYTES, TREE_HASH_FIELD_BITS, VERSION_BITS,
};
pub use limits::CodecLimits;
pub use selection::{LoadoutSelections, Selection};
