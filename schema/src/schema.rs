//! Talent tree schema definitions and validation.

use std::collections::{HashMap, HashSet};

use crate::error::{SchemaError, SchemaResult};
use crate::{EntryId, NodeDef, NodeId, NodeKind, SpecId};

/// Per-specialization talent tree description.
///
/// The node order is the canonical traversal order and is part of the wire
/// contract: it is supplied data and is never sorted or derived. Schemas are
/// immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SchemaRepr", into = "SchemaRepr")
)]
pub struct TalentTreeSchema {
    spec_id: SpecId,
    nodes: Vec<NodeDef>,
    index: HashMap<NodeId, usize>,
}

impl TalentTreeSchema {
    /// Creates a schema from nodes in canonical order after validation.
    pub fn new(spec_id: SpecId, nodes: Vec<NodeDef>) -> SchemaResult<Self> {
        let index = validate(&nodes)?;
        Ok(Self {
            spec_id,
            nodes,
            index,
        })
    }

    /// Creates a schema builder.
    #[must_use]
    pub fn builder(spec_id: SpecId) -> SchemaBuilder {
        SchemaBuilder {
            spec_id,
            nodes: Vec::new(),
        }
    }

    /// The specialization this schema applies to.
    #[must_use]
    pub const fn spec_id(&self) -> SpecId {
        self.spec_id
    }

    /// All nodes in canonical order, free nodes included.
    #[must_use]
    pub fn canonical_order(&self) -> &[NodeDef] {
        &self.nodes
    }

    /// Nodes that occupy space on the wire, in canonical order.
    pub fn selectable_nodes(&self) -> impl Iterator<Item = &NodeDef> {
        self.nodes.iter().filter(|node| !node.free)
    }

    /// Number of nodes, free nodes included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node by ID.
    #[must_use]
    pub fn node_by_id(&self, id: NodeId) -> Option<&NodeDef> {
        self.index.get(&id).map(|&pos| &self.nodes[pos])
    }

    /// Returns the zero-based position of `entry` within `node`'s entries.
    #[must_use]
    pub fn index_of_entry(&self, node: &NodeDef, entry: EntryId) -> Option<usize> {
        node.entry_index(entry)
    }
}

/// Builder for `TalentTreeSchema`.
#[derive(Debug)]
pub struct SchemaBuilder {
    spec_id: SpecId,
    nodes: Vec<NodeDef>,
}

impl SchemaBuilder {
    /// Appends a node to the canonical order.
    #[must_use]
    pub fn node(mut self, node: NodeDef) -> Self {
        self.nodes.push(node);
        self
    }

    /// Builds the schema after validation.
    pub fn build(self) -> SchemaResult<TalentTreeSchema> {
        TalentTreeSchema::new(self.spec_id, self.nodes)
    }
}

fn validate(nodes: &[NodeDef]) -> SchemaResult<HashMap<NodeId, usize>> {
    let mut index = HashMap::with_capacity(nodes.len());
    for (pos, node) in nodes.iter().enumerate() {
        if index.insert(node.id, pos).is_some() {
            return Err(SchemaError::DuplicateNodeId { id: node.id });
        }
        validate_node(node)?;
    }
    Ok(index)
}

fn validate_node(node: &NodeDef) -> SchemaResult<()> {
    if node.max_ranks == 0 {
        return Err(SchemaError::ZeroMaxRanks { node: node.id });
    }
    if node.kind == NodeKind::Choice && node.entries.is_empty() {
        return Err(SchemaError::EmptyChoiceNode { node: node.id });
    }

    let mut entry_ids = HashSet::new();
    for entry in &node.entries {
        if !entry_ids.insert(entry.id) {
            return Err(SchemaError::DuplicateEntryId {
                node: node.id,
                entry: entry.id,
            });
        }
    }
    Ok(())
}

/// Serialized form of a schema, as found in the game-data artifact.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SchemaRepr {
    spec_id: SpecId,
    nodes: Vec<NodeDef>,
}

#[cfg(feature = "serde")]
impl TryFrom<SchemaRepr> for TalentTreeSchema {
    type Error = SchemaError;

    fn try_from(repr: SchemaRepr) -> SchemaResult<Self> {
        Self::new(repr.spec_id, repr.nodes)
    }
}

#[cfg(feature = "serde")]
impl From<TalentTreeSchema> for SchemaRepr {
    fn from(schema: TalentTreeSchema) -> Self {
        Self {
            spec_id: schema.spec_id,
            nodes: schema.nodes,
        }
    }
}
