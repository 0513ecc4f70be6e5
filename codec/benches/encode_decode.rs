use criterion::{black_box, criterion_group, criterion_main, Criterion};

use codec::{decode_loadout, encode_loadout, LoadoutSelections, Selection};
use schema::{EntryId, NodeDef, NodeId, SpecId, TalentTreeSchema};

/// A tree about the size of a class tree plus a spec tree.
fn tree() -> TalentTreeSchema {
    let nodes = (0..180u32)
        .map(|idx| {
            let id = NodeId::new(80_000 + idx);
            match idx % 7 {
                0 => NodeDef::choice(id, [EntryId::new(idx * 2), EntryId::new(idx * 2 + 1)]),
                3 => NodeDef::normal(id, 1).free(),
                4 => NodeDef::normal(id, 2),
                _ => NodeDef::normal(id, 1),
            }
        })
        .collect();
    TalentTreeSchema::new(SpecId::new(577), nodes).unwrap()
}

fn build(schema: &TalentTreeSchema) -> LoadoutSelections {
    let mut selections = LoadoutSelections::new();
    for node in schema.selectable_nodes().step_by(2) {
        let mut selection = Selection::new(node.id, 1);
        if let Some(entry) = node.entry_at(0).filter(|_| node.is_choice()) {
            selection = selection.with_choice(entry);
        }
        selections.insert(selection).unwrap();
    }
    selections
}

fn bench_encode_decode(c: &mut Criterion) {
    let schema = tree();
    let selections = build(&schema);
    let wire = encode_loadout(&schema, &selections).unwrap();

    c.bench_function("encode_loadout", |b| {
        b.iter(|| encode_loadout(black_box(&schema), black_box(&selections)).unwrap());
    });
    c.bench_function("decode_loadout", |b| {
        b.iter(|| decode_loadout(black_box(&schema), black_box(&wire)).unwrap());
    });
}

criterion_group!(benches, bench_encode_decode);
criterion_main!(benches);
