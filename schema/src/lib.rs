//! Talent tree schema definitions consumed by the loadout codec.
//!
//! This crate describes the shape of a specialization's talent tree:
//! - Identifier newtypes for specs, nodes, and choice entries
//! - Node definitions (rank capacity, choice entries, free nodes)
//! - The canonical traversal order shared by encoder and decoder
//! - Schema sets keyed by spec id, as shipped in game-data artifacts
//! - Deterministic schema fingerprints
//!
//! # Design Principles
//!
//! - **Supplied data** - Schemas come from an external game-data source; nothing here derives them.
//! - **Immutable once built** - A validated schema is shared read-only across threads.
//! - **Order is contract** - The canonical order is never sorted or rearranged.

mod error;
mod hash;
mod ids;
mod node;
mod schema;
mod set;

pub use error::{SchemaError, SchemaResult};
pub use hash::{schema_fingerprint, FINGERPRINT_BYTES};
pub use ids::{EntryId, NodeId, SpecId};
pub use node::{EntryDef, NodeDef, NodeKind};
pub use schema::{SchemaBuilder, TalentTreeSchema};
pub use set::SchemaSet;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn public_api_exports() {
        let schema = TalentTreeSchema::builder(SpecId::new(1))
            .node(NodeDef::normal(NodeId::new(1), 1))
            .build()
            .unwrap();
        let _ = schema_fingerprint(&schema);
        let _ = SchemaSet::new();
        let _: SchemaResult<()> = Ok(());
        let _ = EntryDef::new(EntryId::new(0));
        let _ = NodeKind::Choice;
    }

    #[test]
    fn id_sizes() {
        // spec ids travel in a 16-bit wire field
        assert_eq!(size_of::<SpecId>(), 2);
        assert_eq!(size_of::<NodeId>(), 4);
        assert_eq!(size_of::<EntryId>(), 4);
    }

    #[test]
    fn schema_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TalentTreeSchema>();
        assert_send_sync::<SchemaSet>();
    }
}
