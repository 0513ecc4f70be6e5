//! Schema validation errors.

use thiserror::Error;

use crate::{EntryId, NodeId, SpecId};

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur when building or validating a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Duplicate node ID in a schema.
    #[error("duplicate node id {id}")]
    DuplicateNodeId { id: NodeId },

    /// A node with no purchasable ranks.
    #[error("node {node} has zero max ranks")]
    ZeroMaxRanks { node: NodeId },

    /// A choice node without any entries.
    #[error("choice node {node} has no entries")]
    EmptyChoiceNode { node: NodeId },

    /// Duplicate entry ID within a node.
    #[error("duplicate entry id {entry} in node {node}")]
    DuplicateEntryId { node: NodeId, entry: EntryId },

    /// Two schemas for the same specialization in one set.
    #[error("duplicate schema for spec {spec_id}")]
    DuplicateSpecId { spec_id: SpecId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_mentions_ids() {
        let err = SchemaError::DuplicateEntryId {
            node: NodeId::new(10),
            entry: EntryId::new(20),
        };
        let msg = err.to_string();
        assert!(msg.contains("10"));
        assert!(msg.contains("20"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<SchemaError>();
    }
}
