//! Loadout string decoding.
//!
//! Decoding mirrors encoding field for field. The format is not
//! self-describing: the reader only knows where one node ends and the next
//! begins because it walks the same schema the string was encoded against.

use bitstream::{BitReader, SYMBOL_BITS};
use schema::{NodeDef, NodeKind, SchemaSet, SpecId, TalentTreeSchema};

use crate::error::{CodecError, CodecResult, NodeDataReason};
use crate::layout::{self, LoadoutHeader, CHOICE_INDEX_BITS, LOADOUT_VERSION, RANK_BITS};
use crate::limits::CodecLimits;
use crate::selection::{LoadoutSelections, Selection};

/// A loadout decoded against a schema picked from a [`SchemaSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecodedLoadout {
    /// Spec id read from the header.
    pub spec_id: SpecId,
    /// Selections decoded against that spec's schema.
    pub selections: LoadoutSelections,
}

/// Decodes only the header of a loadout string.
///
/// No schema is needed; the header is returned as read, without checking
/// the version.
pub fn decode_header(wire: &str) -> CodecResult<LoadoutHeader> {
    let mut reader = BitReader::new(wire)?;
    layout::read_header(&mut reader)
}

/// Decodes a loadout string against `schema` with default limits.
pub fn decode_loadout(schema: &TalentTreeSchema, wire: &str) -> CodecResult<LoadoutSelections> {
    decode_loadout_with_limits(schema, wire, &CodecLimits::default())
}

/// Decodes a loadout string against `schema`.
///
/// # Errors
///
/// Returns [`CodecError::Bitstream`] for characters outside the alphabet or
/// a string that ends early, [`CodecError::UnsupportedVersion`] and
/// [`CodecError::SpecMismatch`] for header problems,
/// [`CodecError::InvalidNodeData`] when a node block contradicts the schema,
/// [`CodecError::TrailingData`] when whole symbols remain unread, and
/// [`CodecError::NonZeroPadding`] when the final symbol's unused bits are set.
pub fn decode_loadout_with_limits(
    schema: &TalentTreeSchema,
    wire: &str,
    limits: &CodecLimits,
) -> CodecResult<LoadoutSelections> {
    let result = decode_inner(schema, wire, limits);
    match &result {
        Ok(selections) => tracing::debug!(
            spec_id = %schema.spec_id(),
            selected = selections.len(),
            symbols = wire.len(),
            "decoded loadout"
        ),
        Err(err) => tracing::debug!(
            spec_id = %schema.spec_id(),
            error = %err,
            "loadout decode rejected"
        ),
    }
    result
}

/// Decodes a loadout string, picking the schema by the header's spec id.
pub fn decode_loadout_from_set(
    schemas: &SchemaSet,
    wire: &str,
    limits: &CodecLimits,
) -> CodecResult<DecodedLoadout> {
    limits.check_wire(wire.len())?;
    let spec_id = decode_header(wire)?.spec_id;
    let schema = schemas
        .get(spec_id)
        .ok_or(CodecError::UnknownSpec { spec_id })?;
    let selections = decode_loadout_with_limits(schema, wire, limits)?;
    Ok(DecodedLoadout {
        spec_id,
        selections,
    })
}

fn decode_inner(
    schema: &TalentTreeSchema,
    wire: &str,
    limits: &CodecLimits,
) -> CodecResult<LoadoutSelections> {
    limits.check_wire(wire.len())?;
    limits.check_nodes(schema.len())?;

    let mut reader = BitReader::new(wire)?;
    let header = layout::read_header(&mut reader)?;
    if header.version != LOADOUT_VERSION {
        return Err(CodecError::UnsupportedVersion {
            expected: LOADOUT_VERSION,
            found: header.version,
        });
    }
    if header.spec_id != schema.spec_id() {
        return Err(CodecError::SpecMismatch {
            expected: schema.spec_id(),
            found: header.spec_id,
        });
    }

    let mut selections = LoadoutSelections::new();
    for node in schema.selectable_nodes() {
        if let Some(selection) = read_node(&mut reader, node)? {
            selections.insert(selection)?;
        }
    }

    // Anything short of a whole symbol is padding and must be zero, so every
    // accepted string is exactly what the encoder writes for its selections.
    let remaining_bits = reader.bits_remaining();
    if remaining_bits >= SYMBOL_BITS as usize {
        return Err(CodecError::TrailingData { remaining_bits });
    }
    if remaining_bits > 0 && reader.read_bits(remaining_bits as u8)? != 0 {
        return Err(CodecError::NonZeroPadding {
            padding_bits: remaining_bits,
        });
    }
    Ok(selections)
}

fn read_node(reader: &mut BitReader, node: &NodeDef) -> CodecResult<Option<Selection>> {
    if !reader.read_bool()? {
        return Ok(None);
    }
    let invalid = |reason| CodecError::InvalidNodeData {
        node: node.id,
        reason,
    };

    let ranks = if reader.read_bool()? {
        let ranks = reader.read_bits(RANK_BITS)?;
        if ranks == 0 || ranks >= u32::from(node.max_ranks) {
            return Err(invalid(NodeDataReason::RanksOutOfRange {
                ranks,
                max_ranks: node.max_ranks,
            }));
        }
        // below max_ranks, so it fits
        ranks as u8
    } else {
        node.max_ranks
    };

    let is_choice = reader.read_bool()?;
    if is_choice != node.is_choice() {
        return Err(invalid(NodeDataReason::ChoiceFlagMismatch {
            expected: node.kind,
        }));
    }

    let mut selection = Selection::new(node.id, ranks);
    if node.kind == NodeKind::Choice {
        let index = reader.read_bits(CHOICE_INDEX_BITS)?;
        let entry = node.entry_at(index as usize).ok_or_else(|| {
            invalid(NodeDataReason::EntryIndexOutOfRange {
                index,
                entries: node.entries.len(),
            })
        })?;
        selection = selection.with_choice(entry);
    }
    Ok(Some(selection))
}
