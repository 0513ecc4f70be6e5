//! Loadout string encoding.

use std::collections::HashMap;

use bitstream::BitWriter;
use schema::{NodeDef, NodeId, TalentTreeSchema};

use crate::error::{CodecError, CodecResult, MismatchReason};
use crate::layout::{self, LoadoutHeader, CHOICE_INDEX_BITS, RANK_BITS};
use crate::limits::CodecLimits;
use crate::selection::{LoadoutSelections, Selection};

/// A selection checked against its node, with the choice resolved to a wire index.
#[derive(Debug, Clone, Copy)]
struct Resolved {
    ranks: u8,
    choice_index: Option<usize>,
}

/// Encodes `selections` into a loadout string using `schema`'s canonical order.
///
/// The output is a pure function of its inputs: identical schemas and
/// selections always produce identical strings.
///
/// # Errors
///
/// Returns [`CodecError::SchemaMismatch`] if any selection names an unknown
/// node, a free node, an entry the node does not offer, or a rank count
/// outside the node's capacity. Returns [`CodecError::Bitstream`] if a value
/// does not fit its wire field (a partial rank count of 64 or more, or a
/// choice index of 4 or more).
pub fn encode_loadout(
    schema: &TalentTreeSchema,
    selections: &LoadoutSelections,
) -> CodecResult<String> {
    encode_loadout_with_limits(schema, selections, &CodecLimits::default())
}

/// Encodes a loadout string, enforcing `limits` on the schema size.
pub fn encode_loadout_with_limits(
    schema: &TalentTreeSchema,
    selections: &LoadoutSelections,
    limits: &CodecLimits,
) -> CodecResult<String> {
    let result = encode_inner(schema, selections, limits);
    match &result {
        Ok(wire) => tracing::debug!(
            spec_id = %schema.spec_id(),
            selected = selections.len(),
            symbols = wire.len(),
            "encoded loadout"
        ),
        Err(err) => tracing::debug!(
            spec_id = %schema.spec_id(),
            error = %err,
            "loadout encode rejected"
        ),
    }
    result
}

fn encode_inner(
    schema: &TalentTreeSchema,
    selections: &LoadoutSelections,
    limits: &CodecLimits,
) -> CodecResult<String> {
    limits.check_nodes(schema.len())?;

    // Every selection is checked before the first bit is written.
    let resolved = selections
        .iter()
        .map(|selection| resolve(schema, selection).map(|r| (selection.node, r)))
        .collect::<CodecResult<HashMap<NodeId, Resolved>>>()?;

    let mut writer = BitWriter::with_capacity(layout::max_symbols(schema.len()));
    layout::write_header(&mut writer, &LoadoutHeader::new(schema.spec_id()))?;

    for node in schema.selectable_nodes() {
        write_node(&mut writer, node, resolved.get(&node.id))?;
    }

    Ok(writer.finish())
}

fn resolve(schema: &TalentTreeSchema, selection: &Selection) -> CodecResult<Resolved> {
    let mismatch = |reason| CodecError::SchemaMismatch {
        node: selection.node,
        reason,
    };

    let node = schema
        .node_by_id(selection.node)
        .ok_or_else(|| mismatch(MismatchReason::UnknownNode))?;
    if node.free {
        return Err(mismatch(MismatchReason::FreeNode));
    }
    if selection.ranks == 0 || selection.ranks > node.max_ranks {
        return Err(mismatch(MismatchReason::RanksOutOfRange {
            ranks: selection.ranks,
            max_ranks: node.max_ranks,
        }));
    }

    let choice_index = match (node.is_choice(), selection.choice) {
        (true, Some(entry)) => Some(
            schema
                .index_of_entry(node, entry)
                .ok_or_else(|| mismatch(MismatchReason::UnknownEntry { entry }))?,
        ),
        (true, None) => return Err(mismatch(MismatchReason::MissingChoice)),
        (false, Some(entry)) => return Err(mismatch(MismatchReason::UnexpectedChoice { entry })),
        (false, None) => None,
    };

    Ok(Resolved {
        ranks: selection.ranks,
        choice_index,
    })
}

fn write_node(writer: &mut BitWriter, node: &NodeDef, resolved: Option<&Resolved>) -> CodecResult<()> {
    let Some(resolved) = resolved else {
        writer.write_bool(false);
        return Ok(());
    };
    writer.write_bool(true);

    let partial = resolved.ranks < node.max_ranks;
    writer.write_bool(partial);
    if partial {
        writer.write_bits(u32::from(resolved.ranks), RANK_BITS)?;
    }

    writer.write_bool(resolved.choice_index.is_some());
    if let Some(index) = resolved.choice_index {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        writer.write_bits(index, CHOICE_INDEX_BITS)?;
    }
    Ok(())
}
