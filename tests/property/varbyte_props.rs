//! Varbyte and gap-encoding round-trips over the full u32 range.

use proptest::prelude::*;

use talpa::binary::varbyte;

proptest! {
    /// decode(encode(n)) == n, consuming exactly the encoded bytes.
    #[test]
    fn roundtrip_any_u32(value in any::<u32>()) {
        let mut buf = Vec::new();
        varbyte::encode(value, &mut buf);
        let (decoded, used) = varbyte::decode(&buf).unwrap();
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(used, buf.len());
    }

    /// The encoding takes ⌈bitlen(n)/7⌉ bytes, one byte for zero.
    #[test]
    fn encoded_length_matches_bit_width(value in any::<u32>()) {
        let mut buf = Vec::new();
        varbyte::encode(value, &mut buf);
        let expected = if value == 0 {
            1
        } else {
            (32 - value.leading_zeros()).div_ceil(7) as usize
        };
        prop_assert_eq!(buf.len(), expected);
    }

    /// Gap encoding reproduces any strictly ascending sequence.
    #[test]
    fn delta_roundtrip(values in prop::collection::btree_set(any::<u32>(), 0..200)) {
        let values: Vec<u32> = values.into_iter().collect();
        let mut buf = Vec::new();
        varbyte::encode_deltas(&values, &mut buf);

        let mut decoded = Vec::new();
        let used = varbyte::decode_deltas(&buf, values.len(), &mut decoded).unwrap();
        prop_assert_eq!(used, buf.len());
        prop_assert_eq!(decoded, values);
    }
}
