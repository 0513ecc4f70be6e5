use bitstream::{symbol_value, BitReader, BitWriter};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Bit(bool),
    Bits { bits: u8, value: u32 },
}

fn mask_value(bits: u8, value: u32) -> u32 {
    if bits >= 32 {
        value
    } else {
        let mask = (1u32 << bits) - 1;
        value & mask
    }
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<bool>().prop_map(Op::Bit),
        (1u8..=32, any::<u32>()).prop_map(|(bits, value)| Op::Bits {
            bits,
            value: mask_value(bits, value),
        }),
    ]
}

proptest! {
    #[test]
    fn prop_roundtrip_ops(ops in prop::collection::vec(op_strategy(), 1..64)) {
        let mut writer = BitWriter::new();

        for op in &ops {
            match op {
                Op::Bit(b) => writer.write_bool(*b),
                Op::Bits { bits, value } => writer.write_bits(*value, *bits).unwrap(),
            }
        }

        let bits_written = writer.bits_written();
        let symbols = writer.finish();
        prop_assert_eq!(symbols.len(), bits_written.div_ceil(6));
        prop_assert!(symbols.chars().all(|ch| symbol_value(ch).is_some()));

        let mut reader = BitReader::new(&symbols).unwrap();
        for op in &ops {
            match op {
                Op::Bit(b) => {
                    prop_assert_eq!(reader.read_bool().unwrap(), *b);
                }
                Op::Bits { bits, value } => {
                    prop_assert_eq!(reader.read_bits(*bits).unwrap(), *value);
                }
            }
        }
        prop_assert!(reader.bits_remaining() < 6);
    }

    #[test]
    fn prop_reader_never_panics(input in "[A-Za-z0-9+/#=]{0,64}", widths in prop::collection::vec(0u8..=40, 0..32)) {
        if let Ok(mut reader) = BitReader::new(&input) {
            for bits in widths {
                let _ = reader.read_bits(bits);
            }
        }
    }
}
