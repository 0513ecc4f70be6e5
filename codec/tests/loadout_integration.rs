use std::sync::Arc;
use std::thread;

use bitstream::{symbol_value, BitError};
use codec::{
    decode_header, decode_loadout, encode_loadout, CodecError, LoadoutSelections, MismatchReason,
    Selection, LOADOUT_VERSION,
};
use schema::{EntryId, NodeDef, NodeId, SpecId, TalentTreeSchema};

fn nid(value: u32) -> NodeId {
    NodeId::new(value)
}

fn eid(value: u32) -> EntryId {
    EntryId::new(value)
}

/// Class nodes followed by spec nodes, with a free entry node at the top.
fn tree() -> TalentTreeSchema {
    TalentTreeSchema::builder(SpecId::new(577))
        .node(NodeDef::normal(nid(90_001), 1).free())
        .node(NodeDef::normal(nid(90_002), 1))
        .node(NodeDef::normal(nid(90_003), 2))
        .node(NodeDef::choice(
            nid(90_004),
            [eid(1), eid(2), eid(3), eid(4)],
        ))
        .node(NodeDef::normal(nid(90_005), 3))
        .node(NodeDef::normal(nid(91_001), 1).free())
        .node(NodeDef::choice(nid(91_002), [eid(10), eid(11)]).max_ranks(2))
        .node(NodeDef::normal(nid(91_003), 1))
        .build()
        .unwrap()
}

fn selections(items: impl IntoIterator<Item = Selection>) -> LoadoutSelections {
    LoadoutSelections::from_selections(items).unwrap()
}

fn full_build() -> LoadoutSelections {
    selections([
        Selection::new(nid(90_002), 1),
        Selection::new(nid(90_003), 1),
        Selection::new(nid(90_004), 1).with_choice(eid(4)),
        Selection::new(nid(90_005), 3),
        Selection::new(nid(91_002), 1).with_choice(eid(10)),
    ])
}

#[test]
fn roundtrip_full_build() {
    let schema = tree();
    let build = full_build();
    let wire = encode_loadout(&schema, &build).unwrap();
    assert_eq!(decode_loadout(&schema, &wire).unwrap(), build);
}

#[test]
fn roundtrip_every_choice_index() {
    let schema = tree();
    for entry in 1..=4 {
        let build = selections([Selection::new(nid(90_004), 1).with_choice(eid(entry))]);
        let wire = encode_loadout(&schema, &build).unwrap();
        assert_eq!(decode_loadout(&schema, &wire).unwrap(), build);
    }
}

#[test]
fn encoding_is_deterministic() {
    let schema = tree();
    let a = encode_loadout(&schema, &full_build()).unwrap();
    let b = encode_loadout(&schema, &full_build()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn insertion_order_does_not_matter() {
    let schema = tree();
    let mut reversed: Vec<Selection> = full_build().iter().copied().collect();
    reversed.reverse();
    let reversed = selections(reversed);
    assert_eq!(
        encode_loadout(&schema, &reversed).unwrap(),
        encode_loadout(&schema, &full_build()).unwrap()
    );
}

#[test]
fn free_nodes_are_rejected_and_invisible() {
    let schema = tree();
    let base = encode_loadout(&schema, &full_build()).unwrap();

    let mut with_free = full_build();
    with_free.insert(Selection::new(nid(90_001), 1)).unwrap();
    let err = encode_loadout(&schema, &with_free).unwrap_err();
    assert_eq!(
        err,
        CodecError::SchemaMismatch {
            node: nid(90_001),
            reason: MismatchReason::FreeNode
        }
    );

    // Free nodes take no space: the same tree without them encodes identically.
    let without_free = TalentTreeSchema::new(
        schema.spec_id(),
        schema.selectable_nodes().cloned().collect(),
    )
    .unwrap();
    assert_eq!(encode_loadout(&without_free, &full_build()).unwrap(), base);
}

#[test]
fn output_stays_in_alphabet() {
    let schema = tree();
    let wire = encode_loadout(&schema, &full_build()).unwrap();
    assert!(wire.chars().all(|ch| symbol_value(ch).is_some()));
}

#[test]
fn decode_rejects_foreign_character() {
    let schema = tree();
    let mut wire = encode_loadout(&schema, &full_build()).unwrap();
    wire.replace_range(3..4, "#");
    let err = decode_loadout(&schema, &wire).unwrap_err();
    assert_eq!(
        err,
        CodecError::Bitstream(BitError::InvalidSymbol {
            symbol: '#',
            position: 3
        })
    );
}

#[test]
fn header_is_stable_across_selections() {
    let schema = tree();
    let builds = [
        LoadoutSelections::new(),
        full_build(),
        selections([Selection::new(nid(91_003), 1)]),
    ];
    for build in &builds {
        let header = decode_header(&encode_loadout(&schema, build).unwrap()).unwrap();
        assert_eq!(header.version, LOADOUT_VERSION);
        assert_eq!(header.spec_id, SpecId::new(577));
        assert!(header.has_empty_tree_hash());
    }
}

#[test]
fn partial_rank_adds_six_bits() {
    let schema = tree();
    let full = encode_loadout(&schema, &selections([Selection::new(nid(90_005), 3)])).unwrap();
    let partial = encode_loadout(&schema, &selections([Selection::new(nid(90_005), 2)])).unwrap();
    // 152 header + 5 unselected nodes + 3 bits for the full node = 160 bits;
    // the rank field makes it 166
    assert_eq!(full.len(), 27);
    assert_eq!(partial.len(), 28);
    assert_eq!(
        decode_loadout(&schema, &partial)
            .unwrap()
            .get(nid(90_005))
            .unwrap()
            .ranks,
        2
    );
}

#[test]
fn partially_ranked_choice_node_roundtrips() {
    let schema = tree();
    let build = selections([Selection::new(nid(91_002), 1).with_choice(eid(11))]);
    let wire = encode_loadout(&schema, &build).unwrap();
    assert_eq!(decode_loadout(&schema, &wire).unwrap(), build);
}

#[test]
fn decoding_with_another_tree_fails() {
    let schema = tree();
    let wire = encode_loadout(&schema, &full_build()).unwrap();
    let shorter = TalentTreeSchema::new(SpecId::new(577), vec![NodeDef::normal(nid(1), 1)]).unwrap();
    assert!(decode_loadout(&shorter, &wire).is_err());
}

#[test]
fn concurrent_calls_share_one_schema() {
    let schema = Arc::new(tree());
    let expected = encode_loadout(&schema, &full_build()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                let wire = encode_loadout(&schema, &full_build()).unwrap();
                let decoded = decode_loadout(&schema, &wire).unwrap();
                (wire, decoded)
            })
        })
        .collect();

    for handle in handles {
        let (wire, decoded) = handle.join().unwrap();
        assert_eq!(wire, expected);
        assert_eq!(decoded, full_build());
    }
}
