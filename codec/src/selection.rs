//! Player talent selections.

use std::collections::BTreeMap;

use schema::{EntryId, NodeId};

use crate::error::{CodecError, CodecResult};

/// One chosen node outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub node: NodeId,
    /// Ranks purchased, `1..=max_ranks` of the node.
    pub ranks: u8,
    /// Active entry; present only for choice nodes.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub choice: Option<EntryId>,
}

impl Selection {
    /// Creates a selection of `ranks` ranks at a normal node.
    #[must_use]
    pub const fn new(node: NodeId, ranks: u8) -> Self {
        Self {
            node,
            ranks,
            choice: None,
        }
    }

    /// Sets the active entry of a choice node.
    #[must_use]
    pub const fn with_choice(mut self, entry: EntryId) -> Self {
        self.choice = Some(entry);
        self
    }
}

/// A set of selections, unique by node id.
///
/// Iteration is in ascending node id order, independent of insertion order;
/// wire order comes from the schema, never from this set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Selection>", into = "Vec<Selection>")
)]
pub struct LoadoutSelections {
    selections: BTreeMap<NodeId, Selection>,
}

impl LoadoutSelections {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set, rejecting a node selected twice.
    pub fn from_selections(selections: impl IntoIterator<Item = Selection>) -> CodecResult<Self> {
        let mut set = Self::new();
        for selection in selections {
            set.insert(selection)?;
        }
        Ok(set)
    }

    /// Adds a selection.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::DuplicateSelection`] if the node is already selected.
    pub fn insert(&mut self, selection: Selection) -> CodecResult<()> {
        if self.selections.contains_key(&selection.node) {
            return Err(CodecError::DuplicateSelection {
                node: selection.node,
            });
        }
        self.selections.insert(selection.node, selection);
        Ok(())
    }

    /// Removes and returns the selection for `node`.
    pub fn remove(&mut self, node: NodeId) -> Option<Selection> {
        self.selections.remove(&node)
    }

    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<&Selection> {
        self.selections.get(&node)
    }

    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.selections.contains_key(&node)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Iterates selections in ascending node id order.
    pub fn iter(&self) -> impl Iterator<Item = &Selection> {
        self.selections.values()
    }

    /// Total ranks spent across all selections.
    #[must_use]
    pub fn total_ranks(&self) -> u32 {
        self.iter().map(|selection| u32::from(selection.ranks)).sum()
    }
}

impl TryFrom<Vec<Selection>> for LoadoutSelections {
    type Error = CodecError;

    fn try_from(selections: Vec<Selection>) -> CodecResult<Self> {
        Self::from_selections(selections)
    }
}

impl From<LoadoutSelections> for Vec<Selection> {
    fn from(set: LoadoutSelections) -> Self {
        set.selections.into_values().collect()
    }
}

impl<'a> IntoIterator for &'a LoadoutSelections {
    type Item = &'a Selection;
    type IntoIter = std::collections::btree_map::Values<'a, NodeId, Selection>;

    fn into_iter(self) -> Self::IntoIter {
        self.selections.values()
    }
}
