//! Limits for bounded encoding and decoding.

use crate::error::{CodecError, CodecResult, LimitKind};

/// Codec limits enforced before any bits are read or written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecLimits {
    /// Maximum length of an input string, in bytes.
    pub max_wire_bytes: usize,
    /// Maximum number of nodes in a schema's canonical order.
    pub max_nodes: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_wire_bytes: 4096,
            max_nodes: 2048,
        }
    }
}

impl CodecLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_wire_bytes: 256,
            max_nodes: 64,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_wire_bytes: usize::MAX,
            max_nodes: usize::MAX,
        }
    }

    pub(crate) fn check_nodes(&self, actual: usize) -> CodecResult<()> {
        check(LimitKind::SchemaNodes, self.max_nodes, actual)
    }

    pub(crate) fn check_wire(&self, actual: usize) -> CodecResult<()> {
        check(LimitKind::WireBytes, self.max_wire_bytes, actual)
    }
}

fn check(kind: LimitKind, limit: usize, actual: usize) -> CodecResult<()> {
    if actual > limit {
        return Err(CodecError::LimitsExceeded {
            kind,
            limit,
            actual,
        });
    }
    Ok(())
}
