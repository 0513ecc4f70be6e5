//! Command-line encoding, decoding, and inspection of talent loadout strings.
//!
//! This crate provides the helpers behind the `loadout-tools` binary:
//!
//! - Load schema artifacts (a single tree or a set keyed by spec id)
//! - Encode selection files into loadout strings
//! - Decode loadout strings into selections
//! - Inspect a string's header without a schema
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to see what a loadout string contains.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use codec::{
    decode_header, decode_loadout_from_set, encode_loadout, CodecLimits, DecodedLoadout,
    LoadoutHeader, LoadoutSelections,
};
use schema::{schema_fingerprint, SchemaSet, SpecId, TalentTreeSchema};
use serde::Serialize;

/// Parses a schema artifact: either one schema object or an array of them.
pub fn parse_schemas(json: &str) -> Result<SchemaSet> {
    let value: serde_json::Value = serde_json::from_str(json).context("parse schema json")?;
    if value.is_array() {
        return serde_json::from_value(value).context("parse schema set");
    }
    let schema: TalentTreeSchema = serde_json::from_value(value).context("parse schema")?;
    let mut set = SchemaSet::new();
    set.insert(schema)?;
    Ok(set)
}

/// Reads and parses a schema artifact from disk.
pub fn load_schemas(path: &Path) -> Result<SchemaSet> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read schema {}", path.display()))?;
    let set = parse_schemas(&contents)?;
    tracing::debug!(path = %path.display(), schemas = set.len(), "loaded schema artifact");
    Ok(set)
}

/// Picks the schema to encode against.
///
/// A spec id is required only when the set holds more than one schema.
pub fn select_schema(set: &SchemaSet, spec: Option<SpecId>) -> Result<&TalentTreeSchema> {
    match spec {
        Some(spec_id) => set
            .get(spec_id)
            .ok_or_else(|| anyhow!("no schema for spec {spec_id}")),
        None => {
            let mut schemas = set.iter();
            match (schemas.next(), schemas.next()) {
                (Some(schema), None) => Ok(schema),
                (None, _) => bail!("schema artifact is empty"),
                (Some(_), Some(_)) => bail!("schema artifact holds {} specs, pass --spec", set.len()),
            }
        }
    }
}

/// Parses a selection file: a JSON array of `{ node, ranks, choice? }`.
pub fn parse_selections(json: &str) -> Result<LoadoutSelections> {
    serde_json::from_str(json).context("parse selections json")
}

/// Encodes selections against the chosen schema.
pub fn encode_selections(
    set: &SchemaSet,
    spec: Option<SpecId>,
    selections: &LoadoutSelections,
) -> Result<String> {
    let schema = select_schema(set, spec)?;
    encode_loadout(schema, selections)
        .with_context(|| format!("encode loadout for spec {}", schema.spec_id()))
}

/// Decodes a loadout string, choosing the schema by its header spec id.
pub fn decode_wire(set: &SchemaSet, wire: &str) -> Result<DecodedLoadout> {
    decode_loadout_from_set(set, wire.trim(), &CodecLimits::default())
        .context("decode loadout string")
}

/// Summary of a loadout string.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub header: LoadoutHeader,
    pub symbols: usize,
    pub bits: usize,
    pub schema: Option<SchemaSummary>,
}

/// Shape of the schema matching a string's spec id.
#[derive(Debug, Serialize)]
pub struct SchemaSummary {
    pub nodes: usize,
    pub selectable_nodes: usize,
    pub choice_nodes: usize,
    pub fingerprint: String,
}

impl SchemaSummary {
    fn new(schema: &TalentTreeSchema) -> Self {
        let mut fingerprint = String::new();
        for byte in schema_fingerprint(schema) {
            let _ = write!(fingerprint, "{byte:02x}");
        }
        Self {
            nodes: schema.len(),
            selectable_nodes: schema.selectable_nodes().count(),
            choice_nodes: schema
                .canonical_order()
                .iter()
                .filter(|node| node.is_choice())
                .count(),
            fingerprint,
        }
    }
}

/// Reads the header of a loadout string and, if available, summarizes its schema.
pub fn inspect_wire(wire: &str, schemas: Option<&SchemaSet>) -> Result<InspectReport> {
    let wire = wire.trim();
    let header = decode_header(wire).context("decode loadout header")?;
    let symbols = wire.chars().count();
    let schema = schemas
        .and_then(|set| set.get(header.spec_id))
        .map(SchemaSummary::new);
    Ok(InspectReport {
        header,
        symbols,
        bits: symbols * bitstream::SYMBOL_BITS as usize,
        schema,
    })
}

/// Formats decoded selections for humans, in canonical node order.
pub fn format_decode_pretty(decoded: &DecodedLoadout, set: &SchemaSet) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "spec {}: {} nodes selected, {} ranks",
        decoded.spec_id,
        decoded.selections.len(),
        decoded.selections.total_ranks()
    );
    let Some(schema) = set.get(decoded.spec_id) else {
        return out;
    };
    for node in schema.selectable_nodes() {
        let Some(selection) = decoded.selections.get(node.id) else {
            continue;
        };
        let _ = write!(
            out,
            "  node {}: {}/{}",
            node.id, selection.ranks, node.max_ranks
        );
        if let Some(entry) = selection.choice {
            let _ = write!(out, " entry {entry}");
        }
        out.push('\n');
    }
    out
}

/// Formats an inspect report for humans.
pub fn format_inspect_pretty(report: &InspectReport) -> String {
    let header = &report.header;
    let mut out = String::new();
    let _ = writeln!(out, "version: {} spec: {}", header.version, header.spec_id);
    if header.has_empty_tree_hash() {
        let _ = writeln!(out, "tree hash: (empty)");
    } else {
        let _ = write!(out, "tree hash: ");
        for byte in header.tree_hash {
            let _ = write!(out, "{byte:02x}");
        }
        out.push('\n');
    }
    let _ = writeln!(out, "symbols: {} ({} bits)", report.symbols, report.bits);
    match &report.schema {
        Some(summary) => {
            let _ = writeln!(
                out,
                "schema: {} nodes ({} selectable, {} choice) fingerprint {}",
                summary.nodes, summary.selectable_nodes, summary.choice_nodes, summary.fingerprint
            );
        }
        None => {
            let _ = writeln!(out, "schema: not loaded");
        }
    }
    out
}
