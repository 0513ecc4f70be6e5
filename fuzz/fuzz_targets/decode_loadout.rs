#![no_main]

use codec::{decode_loadout_with_limits, encode_loadout, CodecLimits};
use libfuzzer_sys::fuzz_target;
use schema::{EntryId, NodeDef, NodeId, SpecId, TalentTreeSchema};

fn schema() -> TalentTreeSchema {
    TalentTreeSchema::builder(SpecId::new(62))
        .node(NodeDef::normal(NodeId::new(1), 1).free())
        .node(NodeDef::normal(NodeId::new(2), 3))
        .node(NodeDef::choice(
            NodeId::new(3),
            [EntryId::new(30), EntryId::new(31), EntryId::new(32)],
        ))
        .node(NodeDef::normal(NodeId::new(4), 1))
        .build()
        .expect("static schema is valid")
}

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let schema = schema();
    // Whatever decodes must encode back to the same string.
    if let Ok(selections) = decode_loadout_with_limits(&schema, input, &CodecLimits::for_testing()) {
        let wire = encode_loadout(&schema, &selections).expect("decoded selections re-encode");
        let again = decode_loadout_with_limits(&schema, &wire, &CodecLimits::for_testing())
            .expect("re-encoded string decodes");
        assert_eq!(again, selections);
        assert_eq!(wire, input);
    }
});
