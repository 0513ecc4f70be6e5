//! Talent node definitions.

use crate::{EntryId, NodeId};

/// The shape of a talent node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum NodeKind {
    /// A single talent that can be ranked up.
    #[default]
    Normal,
    /// Mutually exclusive alternatives; exactly one entry is active when selected.
    Choice,
}

/// One alternative of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryDef {
    pub id: EntryId,
}

impl EntryDef {
    #[must_use]
    pub const fn new(id: EntryId) -> Self {
        Self { id }
    }
}

/// One position in a talent tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeDef {
    pub id: NodeId,
    /// Ranks purchasable at this node (at least 1).
    pub max_ranks: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: NodeKind,
    /// Ordered entries; the position is the index written for choice nodes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub entries: Vec<EntryDef>,
    /// Granted automatically. Free nodes contribute nothing to the wire.
    #[cfg_attr(feature = "serde", serde(default))]
    pub free: bool,
}

impl NodeDef {
    /// Creates a normal node with the given rank capacity.
    #[must_use]
    pub fn normal(id: NodeId, max_ranks: u8) -> Self {
        Self {
            id,
            max_ranks,
            kind: NodeKind::Normal,
            entries: Vec::new(),
            free: false,
        }
    }

    /// Creates a single-rank choice node offering `entries` in order.
    #[must_use]
    pub fn choice(id: NodeId, entries: impl IntoIterator<Item = EntryId>) -> Self {
        Self {
            id,
            max_ranks: 1,
            kind: NodeKind::Choice,
            entries: entries.into_iter().map(EntryDef::new).collect(),
            free: false,
        }
    }

    /// Overrides the rank capacity.
    #[must_use]
    pub const fn max_ranks(mut self, max_ranks: u8) -> Self {
        self.max_ranks = max_ranks;
        self
    }

    /// Appends an entry.
    #[must_use]
    pub fn entry(mut self, id: EntryId) -> Self {
        self.entries.push(EntryDef::new(id));
        self
    }

    /// Marks the node as automatically granted.
    #[must_use]
    pub const fn free(mut self) -> Self {
        self.free = true;
        self
    }

    /// Returns `true` for choice nodes.
    #[must_use]
    pub const fn is_choice(&self) -> bool {
        matches!(self.kind, NodeKind::Choice)
    }

    /// Returns the zero-based position of `entry` within this node's entries.
    #[must_use]
    pub fn entry_index(&self, entry: EntryId) -> Option<usize> {
        self.entries.iter().position(|def| def.id == entry)
    }

    /// Returns the entry at a zero-based position.
    #[must_use]
    pub fn entry_at(&self, index: usize) -> Option<EntryId> {
        self.entries.get(index).map(|def| def.id)
    }
}
