//! Error types for codec operations.

use std::fmt;

use schema::{EntryId, NodeId, NodeKind, SpecId};
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during loadout encoding/decoding.
///
/// Every error aborts the whole call; no partial string or selection set is
/// ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Bitstream error: a field too wide for its width, a character outside
    /// the alphabet, or a read past the end of the input.
    #[error("bitstream error: {0}")]
    Bitstream(#[from] bitstream::BitError),

    /// A selection does not fit the schema it is encoded against.
    #[error("selection for node {node} does not match the schema: {reason}")]
    SchemaMismatch { node: NodeId, reason: MismatchReason },

    /// A node block read from the wire contradicts the schema.
    #[error("invalid data for node {node}: {reason}")]
    InvalidNodeData { node: NodeId, reason: NodeDataReason },

    /// Header carries a format version this codec does not understand.
    #[error("unsupported loadout version {found}, expected {expected}")]
    UnsupportedVersion { expected: u8, found: u8 },

    /// Header spec id differs from the schema's.
    #[error("loadout is for spec {found} but the schema is for spec {expected}")]
    SpecMismatch { expected: SpecId, found: SpecId },

    /// No schema available for the header spec id.
    #[error("no schema for spec {spec_id}")]
    UnknownSpec { spec_id: SpecId },

    /// Whole symbols remain after the last node.
    #[error("{remaining_bits} bits remain after the last node")]
    TrailingData { remaining_bits: usize },

    /// Padding bits in the final symbol are not zero.
    #[error("final symbol carries non-zero padding in its last {padding_bits} bits")]
    NonZeroPadding { padding_bits: usize },

    /// Limits exceeded.
    #[error("{kind} limit exceeded: {actual} > {limit}")]
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// The same node was selected twice.
    #[error("node {node} is selected more than once")]
    DuplicateSelection { node: NodeId },
}

/// Why a selection was rejected against a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MismatchReason {
    #[error("node is not in the schema")]
    UnknownNode,
    #[error("free nodes are granted implicitly and cannot be selected")]
    FreeNode,
    #[error("entry {entry} is not offered by the node")]
    UnknownEntry { entry: EntryId },
    #[error("choice node selected without an entry")]
    MissingChoice,
    #[error("entry {entry} given for a node that is not a choice node")]
    UnexpectedChoice { entry: EntryId },
    #[error("{ranks} ranks outside 1..={max_ranks}")]
    RanksOutOfRange { ranks: u8, max_ranks: u8 },
}

/// Why a decoded node block was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NodeDataReason {
    #[error("choice flag disagrees with {expected:?} node kind")]
    ChoiceFlagMismatch { expected: NodeKind },
    #[error("entry index {index} but the node has {entries} entries")]
    EntryIndexOutOfRange { index: u32, entries: usize },
    #[error("partial rank count {ranks} outside 1..{max_ranks}")]
    RanksOutOfRange { ranks: u32, max_ranks: u8 },
}

/// Specific limit that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    WireBytes,
    SchemaNodes,
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WireBytes => f.write_str("wire bytes"),
            Self::SchemaNodes => f.write_str("schema nodes"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitstream::BitError;

    #[test]
    fn bitstream_errors_convert() {
        let err: CodecError = BitError::ValueOutOfRange { value: 64, bits: 6 }.into();
        assert!(matches!(err, CodecError::Bitstream(_)));
        assert!(err.to_string().contains("64"));
    }

    #[test]
    fn schema_mismatch_display() {
        let err = CodecError::SchemaMismatch {
            node: NodeId::new(7),
            reason: MismatchReason::UnknownEntry {
                entry: EntryId::new(99),
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("node 7"));
        assert!(msg.contains("entry 99"));
    }

    #[test]
    fn limits_display() {
        let err = CodecError::LimitsExceeded {
            kind: LimitKind::WireBytes,
            limit: 10,
            actual: 11,
        };
        assert_eq!(err.to_string(), "wire bytes limit exceeded: 11 > 10");
    }

    #[test]
    fn spec_mismatch_display() {
        let err = CodecError::SpecMismatch {
            expected: SpecId::new(62),
            found: SpecId::new(63),
        };
        let msg = err.to_string();
        assert!(msg.contains("62"));
        assert!(msg.contains("63"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<CodecError>();
    }
}
