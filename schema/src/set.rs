//! Schemas for several specializations, keyed by spec id.

use std::collections::BTreeMap;

use crate::error::{SchemaError, SchemaResult};
use crate::{SpecId, TalentTreeSchema};

/// Read-only collection of talent tree schemas keyed by [`SpecId`].
///
/// This is the shape of the game-data artifact: loaded once, then shared
/// by reference across encode/decode calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<TalentTreeSchema>", into = "Vec<TalentTreeSchema>")
)]
pub struct SchemaSet {
    schemas: BTreeMap<SpecId, TalentTreeSchema>,
}

impl SchemaSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a schema, rejecting a second schema for the same spec.
    pub fn insert(&mut self, schema: TalentTreeSchema) -> SchemaResult<()> {
        let spec_id = schema.spec_id();
        if self.schemas.contains_key(&spec_id) {
            return Err(SchemaError::DuplicateSpecId { spec_id });
        }
        self.schemas.insert(spec_id, schema);
        Ok(())
    }

    /// Returns the schema for `spec_id`.
    #[must_use]
    pub fn get(&self, spec_id: SpecId) -> Option<&TalentTreeSchema> {
        self.schemas.get(&spec_id)
    }

    /// Number of schemas in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Iterates schemas in ascending spec id order.
    pub fn iter(&self) -> impl Iterator<Item = &TalentTreeSchema> {
        self.schemas.values()
    }
}

impl TryFrom<Vec<TalentTreeSchema>> for SchemaSet {
    type Error = SchemaError;

    fn try_from(schemas: Vec<TalentTreeSchema>) -> SchemaResult<Self> {
        let mut set = Self::new();
        for schema in schemas {
            set.insert(schema)?;
        }
        Ok(set)
    }
}

impl From<SchemaSet> for Vec<TalentTreeSchema> {
    fn from(set: SchemaSet) -> Self {
        set.schemas.into_values().collect()
    }
}
