//! Deterministic schema fingerprinting.

use blake3::Hasher;

use crate::{NodeKind, TalentTreeSchema};

/// Size of a schema fingerprint in bytes.
pub const FINGERPRINT_BYTES: usize = 16;

/// Computes a deterministic fingerprint of a schema's canonical order.
///
/// Any change to the traversal order or to a node's shape changes the
/// fingerprint, so two parties holding the same fingerprint agree on the
/// field layout of every loadout string for that spec.
#[must_use]
pub fn schema_fingerprint(schema: &TalentTreeSchema) -> [u8; FINGERPRINT_BYTES] {
    let mut hasher = Hasher::new();
    write_u16(&mut hasher, schema.spec_id().raw());
    write_len(&mut hasher, schema.len());

    for node in schema.canonical_order() {
        write_u32(&mut hasher, node.id.raw());
        write_u8(&mut hasher, node.max_ranks);
        write_kind(&mut hasher, node.kind);
        write_u8(&mut hasher, u8::from(node.free));
        write_len(&mut hasher, node.entries.len());
        for entry in &node.entries {
            write_u32(&mut hasher, entry.id.raw());
        }
    }

    let mut out = [0u8; FINGERPRINT_BYTES];
    out.copy_from_slice(&hasher.finalize().as_bytes()[..FINGERPRINT_BYTES]);
    out
}

fn write_kind(hasher: &mut Hasher, kind: NodeKind) {
    match kind {
        NodeKind::Normal => write_u8(hasher, 0),
        NodeKind::Choice => write_u8(hasher, 1),
    }
}

fn write_len(hasher: &mut Hasher, len: usize) {
    hasher.update(&(len as u64).to_le_bytes());
}

fn write_u8(hasher: &mut Hasher, value: u8) {
    hasher.update(&[value]);
}

fn write_u16(hasher: &mut Hasher, value: u16) {
    hasher.update(&value.to_le_bytes());
}

fn write_u32(hasher: &mut Hasher, value: u32) {
    hasher.update(&value.to_le_bytes());
}
