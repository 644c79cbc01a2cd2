use bitop_range::{BitArray, BitOp};
use proptest::{collection::vec, prelude::*};

fn any_op() -> impl Strategy<Value = BitOp> {
    prop::sample::select(BitOp::ALL.to_vec())
}

// Two equal-length arrays built from random set positions
prop_compose! {
    fn pair(max_len: usize)
        (len in 0..=max_len)
        (a in vec(any::<bool>(), len), b in vec(any::<bool>(), len))
        -> (BitArray<u16>, BitArray<u16>)
    {
        let len = a.len();
        let ones = |bits: Vec<bool>| bits.into_iter().enumerate().filter(|&(_, v)| v).map(|(i, _)| i);
        (
            BitArray::from_positions(ones(a), len),
            BitArray::from_positions(ones(b), len),
        )
    }
}

// One array and a range that fits inside it
fn array_and_range(max_len: usize) -> impl Strategy<Value = (BitArray<u16>, usize, usize)> {
    pair(max_len)
        .prop_flat_map(|(a, _)| {
            let len = a.len();
            (
                Just(a),
                (0..=len).prop_flat_map(move |start| (Just(start), 0..=len - start)),
            )
        })
        .prop_map(|(a, (start, width))| (a, start, width))
}

fn tail_is_clear(bits: &BitArray<u16>) -> bool {
    let rem = bits.len() % 16;
    match bits.as_words().last() {
        Some(&last) if rem != 0 => last >> rem == 0,
        _ => true,
    }
}

proptest! {
    #[test]
    fn test_range_ops_keep_tail_clear(
        op in any_op(),
        arrays in pair(100),
        start in 0usize..=100,
        width in 0usize..=100,
    ) {
        let (mut a, b) = arrays;
        let full = BitArray::<u16>::full(a.len());
        let _ = a.apply_range(op, &b, start, width);
        let _ = a.apply_range(BitOp::Or, &full, start, width);
        let _ = a.set_range(start, width, true);
        prop_assert!(tail_is_clear(&a));
        prop_assert!(a.count_ones() <= a.len());
    }

    #[test]
    fn test_out_of_range_leaves_array_alone(
        op in any_op(),
        arrays in pair(100),
        start in 0usize..=120,
        width in 0usize..=120,
    ) {
        let (mut a, b) = arrays;
        let before = a.clone();
        let result = a.apply_range(op, &b, start, width);
        prop_assert_eq!(result.is_ok(), start + width <= a.len());
        if result.is_err() {
            prop_assert_eq!(a, before);
        }
    }

    #[test]
    fn test_whole_range_matches_operators(arrays in pair(100)) {
        let (a, b) = arrays;
        let len = a.len();

        let mut and = a.clone();
        and.and_range(&b, 0, len).unwrap();
        prop_assert_eq!(&and, &(&a & &b));

        let mut or = a.clone();
        or.or_range(&b, 0, len).unwrap();
        prop_assert_eq!(&or, &(&a | &b));

        let mut xor = a.clone();
        xor.xor_range(&b, 0, len).unwrap();
        prop_assert_eq!(&xor, &(&a ^ &b));
    }

    #[test]
    fn test_count_ones_range_matches_iter(case in array_and_range(100)) {
        let (a, start, width) = case;
        let expected = a.iter_ones().filter(|&i| i >= start && i < start + width).count();
        prop_assert_eq!(a.count_ones_range(start, width), Ok(expected));
    }

    #[test]
    fn test_display_parse_roundtrip(arrays in pair(100)) {
        let (a, _) = arrays;
        let text = a.to_string();
        prop_assert_eq!(text.len(), a.len());
        let back: BitArray<u16> = text.parse().unwrap();
        prop_assert_eq!(back, a);
    }
}
