use bitmask_common::error::ErrorKind;
use bitmask_testkit::{data_gen, reference};

use crate::{BinaryOp, BitmaskArray};

fn bools(bits: &[u8]) -> Vec<bool> {
    bits.iter().map(|&b| b != 0).collect()
}

fn collect(mask: &BitmaskArray) -> Vec<bool> {
    mask.iter().collect()
}

#[test]
fn test_from_bools() {
    let mask = BitmaskArray::from_bools([true, false, true, true]);
    assert_eq!(mask.len(), 4);
    assert_eq!(mask.nbytes(), 1);
    assert!(mask.get(0).unwrap());
    assert!(!mask.get(1).unwrap());
    assert!(mask.get(2).unwrap());
    assert!(mask.get(3).unwrap());
    assert_eq!(mask.sum(), 3);

    // Exactly one byte, then one bit into the next
    let mask = BitmaskArray::from_bools(bools(&[1, 0, 1, 1, 1, 1, 1, 1]));
    assert_eq!(mask.nbytes(), 1);
    assert_eq!(mask.as_bytes(), &[0b1111_1101]);
    let mask = BitmaskArray::from_bools(bools(&[1, 0, 1, 1, 1, 1, 1, 1, 1]));
    assert_eq!(mask.nbytes(), 2);
    assert_eq!(mask.as_bytes(), &[0b1111_1101, 0b1]);

    let collected: BitmaskArray = [false, true].into_iter().collect();
    assert_eq!(collect(&collected), vec![false, true]);
    assert_eq!(BitmaskArray::from(vec![true; 3]), BitmaskArray::full(3));
    assert_eq!(BitmaskArray::from(&[false; 3][..]), BitmaskArray::zeroed(3));
}

#[test]
fn test_empty() {
    let mask = BitmaskArray::new();
    assert_eq!(mask.len(), 0);
    assert!(mask.is_empty());
    assert_eq!(mask.nbytes(), 0);
    assert!(mask.as_bytes().is_empty());
    assert!(mask.all());
    assert!(!mask.any());
    assert_eq!(mask.sum(), 0);
    assert_eq!(mask.iter().count(), 0);
    assert!(mask.get(0).unwrap_err().is_out_of_range());
    assert!(mask.get(-1).unwrap_err().is_out_of_range());
    assert_eq!(mask.invert().len(), 0);
    assert_eq!(mask.and(&BitmaskArray::default()).unwrap().len(), 0);
    assert_eq!(mask, BitmaskArray::from_bools(std::iter::empty()));
}

#[test]
fn test_zeroed_and_full() {
    for &len in data_gen::BOUNDARY_LENGTHS {
        let zeroed = BitmaskArray::zeroed(len);
        let full = BitmaskArray::full(len);
        assert_eq!(zeroed.len(), len);
        assert_eq!(full.len(), len);
        assert_eq!(zeroed.nbytes(), len.div_ceil(8));
        assert_eq!(zeroed.sum(), 0);
        assert_eq!(full.sum(), len);
        assert!(!zeroed.any());
        assert!(full.all());
        assert_eq!(zeroed.count_zeros(), len);
        assert_eq!(full.count_zeros(), 0);
    }
}

#[test]
fn test_from_packed() {
    let mask = BitmaskArray::from_packed(vec![0b0000_0101, 0b1], 9).unwrap();
    assert_eq!(
        collect(&mask),
        bools(&[1, 0, 1, 0, 0, 0, 0, 0, 1])
    );

    let err = BitmaskArray::from_packed(vec![0u8; 1], 9).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
    let err = BitmaskArray::from_packed(vec![0u8; 3], 9).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));

    assert!(BitmaskArray::from_packed(Vec::new(), 0).unwrap().is_empty());
}

#[test]
fn test_get_bounds() {
    let mask = BitmaskArray::from_bools([true, false, true, true]);
    assert!(mask.get(3).is_ok());
    assert!(mask.get(4).unwrap_err().is_out_of_range());
    assert!(mask.get(-4).is_ok());
    assert!(mask.get(-5).unwrap_err().is_out_of_range());
    assert!(mask.get(isize::MAX).unwrap_err().is_out_of_range());
    assert!(mask.get(isize::MIN).unwrap_err().is_out_of_range());

    match mask.get(-5).unwrap_err().into_kind() {
        ErrorKind::OutOfRange { index, len } => {
            assert_eq!(index, -5);
            assert_eq!(len, 4);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_bit_rejects_padding_position() {
    // Position 5 lies inside the single byte but past the logical length
    let mask = BitmaskArray::full(5);
    mask.bit(5);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_set_bit_rejects_padding_position() {
    let mut mask = BitmaskArray::zeroed(5);
    mask.set_bit(7, true);
}

#[test]
fn test_negative_index() {
    let values = data_gen::random_bools(3, 77, 0.5);
    let mask = BitmaskArray::from(values.clone());
    assert_eq!(mask.get(-1).unwrap(), mask.get(76).unwrap());
    for i in 1..=77isize {
        assert_eq!(mask.get(-i).unwrap(), values[(77 - i) as usize]);
    }
    assert!(mask.get(-78).unwrap_err().is_out_of_range());
}

#[test]
fn test_set_item_basic() {
    let mut mask = BitmaskArray::from_bools([true, false, true, true]);
    assert!(!mask.get(1).unwrap());
    assert!(mask.get(2).unwrap());
    mask.set(1, true).unwrap();
    mask.set(2, false).unwrap();
    assert!(mask.get(1).unwrap());
    assert!(!mask.get(2).unwrap());

    mask.set(-3, false).unwrap();
    mask.set(-2, true).unwrap();
    assert!(!mask.get(1).unwrap());
    assert!(mask.get(2).unwrap());
}

#[test]
fn test_set_item_errors() {
    let mut mask = BitmaskArray::from_bools([true, false, true, true]);
    assert!(mask.set(3, true).is_ok());
    assert!(mask.set(4, true).unwrap_err().is_out_of_range());
    assert!(mask.set(-4, true).is_ok());
    assert!(mask.set(-5, true).unwrap_err().is_out_of_range());
    assert_eq!(collect(&mask), vec![true, false, true, true]);
}

#[test]
fn test_set_leaves_other_bits_unchanged() {
    let values = data_gen::random_bools(11, 150, 0.5);
    for i in 0..values.len() {
        for v in [true, false] {
            let mut mask = BitmaskArray::from(values.clone());
            mask.set(i as isize, v).unwrap();
            let mut expected = values.clone();
            expected[i] = v;
            assert_eq!(collect(&mask), expected, "position {i}, value {v}");
        }
    }
}

#[test]
fn test_invert() {
    let mask = BitmaskArray::from_bools(bools(&[1, 0, 1, 1, 1, 1, 1, 1, 1]));
    let inverted = mask.invert();
    assert_eq!(inverted.len(), 9);
    assert!(!inverted.get(0).unwrap());
    assert!(inverted.get(1).unwrap());
    assert!(!inverted.get(2).unwrap());
    assert!(!inverted.get(3).unwrap());
    assert!(!inverted.get(8).unwrap());
    assert_eq!(inverted.sum(), 1);

    // Source is untouched
    assert_eq!(mask.sum(), 8);
    assert_eq!(!&mask, inverted);
    assert_eq!(!mask, inverted);
}

#[test]
fn test_invert_involution() {
    for &len in data_gen::BOUNDARY_LENGTHS {
        let values = data_gen::random_bools(len as u64, len, 0.5);
        let mask = BitmaskArray::from(values.clone());
        let inverted = mask.invert();
        assert_eq!(collect(&inverted), reference::invert(&values), "len {len}");
        assert_eq!(inverted.invert(), mask, "len {len}");
        assert_eq!(inverted.sum() + mask.sum(), len);
    }
}

#[test]
fn test_bitwise_and() {
    let a = BitmaskArray::from_bools(bools(&[1, 0, 1, 1, 1, 1, 1, 1, 1]));
    let b = BitmaskArray::from_bools(bools(&[1, 1, 0, 0, 0, 0, 0, 0, 1]));
    let result = a.and(&b).unwrap();
    assert_eq!(result.len(), 9);
    assert!(result.get(0).unwrap());
    assert!(!result.get(1).unwrap());
    assert!(!result.get(2).unwrap());
    assert!(!result.get(3).unwrap());
    assert!(result.get(8).unwrap());
}

#[test]
fn test_bitwise_truth_tables() {
    let lhs = BitmaskArray::from_bools([true, false, true, false, false]);
    let rhs = BitmaskArray::from_bools([true, true, false, true, true]);

    assert_eq!(
        collect(&lhs.and(&rhs).unwrap()),
        vec![true, false, false, false, false]
    );
    assert_eq!(
        collect(&lhs.or(&rhs).unwrap()),
        vec![true, true, true, true, true]
    );
    assert_eq!(
        collect(&lhs.xor(&rhs).unwrap()),
        vec![false, true, true, true, true]
    );

    let a = BitmaskArray::from_bools([false, false, true, true]);
    let b = BitmaskArray::from_bools([false, true, false, true]);
    for op in [BinaryOp::And, BinaryOp::Or, BinaryOp::Xor] {
        let result = a.binary_op(&b, op).unwrap();
        for i in 0..4 {
            assert_eq!(
                result.bit(i),
                op.eval(a.bit(i), b.bit(i)),
                "{op} at position {i}"
            );
        }
    }
}

#[test]
fn test_bitwise_length_mismatch() {
    let a = BitmaskArray::zeroed(9);
    let b = BitmaskArray::zeroed(8);
    for op in [BinaryOp::And, BinaryOp::Or, BinaryOp::Xor] {
        let err = a.binary_op(&b, op).unwrap_err();
        assert!(matches!(
            err.into_kind(),
            ErrorKind::LengthMismatch {
                expected: 9,
                actual: 8
            }
        ));
    }
}

#[test]
fn test_bitwise_identities() {
    for &len in data_gen::BOUNDARY_LENGTHS {
        let a = BitmaskArray::from(data_gen::random_bools(1000 + len as u64, len, 0.5));
        let b = BitmaskArray::from(data_gen::random_bools(2000 + len as u64, len, 0.3));

        assert_eq!(a.and(&b).unwrap(), b.and(&a).unwrap());
        assert_eq!(a.or(&b).unwrap(), b.or(&a).unwrap());
        assert_eq!(a.xor(&b).unwrap(), b.xor(&a).unwrap());
        assert_eq!(a.and(&a).unwrap(), a);
        assert_eq!(a.or(&a).unwrap(), a);
        assert!(!a.xor(&a).unwrap().any());
        assert_eq!(a.xor(&b).unwrap().xor(&b).unwrap(), a);
        assert!(a.and(&a.invert()).unwrap().sum() == 0);
        assert!(a.or(&a.invert()).unwrap().all());
    }
}

#[test]
fn test_reductions_scenario() {
    let mut values = vec![true; 7];
    values.extend([false; 8]);
    let mask = BitmaskArray::from(values);
    assert!(mask.any());
    assert!(!mask.all());

    assert!(BitmaskArray::full(15).all());
    assert!(!BitmaskArray::zeroed(15).any());

    let mask = BitmaskArray::from_bools(bools(&[1, 0, 1, 0, 0, 1, 1, 1, 1]));
    assert!(mask.any());
    assert!(!mask.all());
    assert_eq!(mask.sum(), 6);
}

#[test]
fn test_reductions_ignore_padding() {
    // Inverting an all-clear array sets the padding bits too.
    for &len in data_gen::BOUNDARY_LENGTHS {
        let full = BitmaskArray::zeroed(len).invert();
        assert_eq!(full.sum(), len, "len {len}");
        assert!(full.all(), "len {len}");

        // And inverting back leaves padding clear with everything else clear.
        let empty = full.invert();
        assert!(!empty.any(), "len {len}");
    }

    let padded = BitmaskArray::from_packed(vec![0b1111_1000], 3).unwrap();
    assert!(!padded.any());
    assert_eq!(padded.sum(), 0);
    assert_eq!(padded.argmax().unwrap(), 0);
    assert_eq!(padded, BitmaskArray::zeroed(3));

    let padded = BitmaskArray::from_packed(vec![0b0000_0111], 3).unwrap();
    assert!(padded.all());
    assert_eq!(padded.to_bytes(), vec![0b111]);
}

#[test]
fn test_reductions_match_reference() {
    for &len in data_gen::BOUNDARY_LENGTHS {
        for density in [0.0, 0.01, 0.5, 0.99, 1.0] {
            let values = data_gen::random_bools(len as u64 * 7, len, density);
            let mask = BitmaskArray::from(values.clone());
            assert_eq!(mask.any(), reference::any(&values), "len {len}");
            assert_eq!(mask.all(), reference::all(&values), "len {len}");
            assert_eq!(mask.sum(), reference::sum(&values), "len {len}");
            assert_eq!(mask.argmin().ok(), reference::argmin(&values), "len {len}");
            assert_eq!(mask.argmax().ok(), reference::argmax(&values), "len {len}");
        }
    }
}

#[test]
fn test_short_circuit_positions() {
    // A single deciding element at every position, including the partial tail.
    let len = 150;
    for position in 0..len {
        let mask = BitmaskArray::from(data_gen::uniform_with_exception(len, false, position));
        assert!(mask.any());
        assert_eq!(mask.first_set(), Some(position));
        assert_eq!(mask.argmax().unwrap(), position);
        assert_eq!(mask.argmin().unwrap(), if position == 0 { 1 } else { 0 });

        let mask = BitmaskArray::from(data_gen::uniform_with_exception(len, true, position));
        assert!(!mask.all());
        assert_eq!(mask.first_clear(), Some(position));
        assert_eq!(mask.argmin().unwrap(), position);
    }
}

#[test]
fn test_argmin_argmax() {
    let mask = BitmaskArray::from_bools([true, true, false, true]);
    assert_eq!(mask.argmin().unwrap(), 2);
    assert_eq!(mask.argmax().unwrap(), 0);

    let mask = BitmaskArray::from_bools([false, false, true]);
    assert_eq!(mask.argmin().unwrap(), 0);
    assert_eq!(mask.argmax().unwrap(), 2);

    // Ties go to the lowest position
    assert_eq!(BitmaskArray::full(70).argmin().unwrap(), 0);
    assert_eq!(BitmaskArray::full(70).argmax().unwrap(), 0);
    assert_eq!(BitmaskArray::zeroed(70).argmin().unwrap(), 0);
    assert_eq!(BitmaskArray::zeroed(70).argmax().unwrap(), 0);

    let empty = BitmaskArray::new();
    assert!(empty.argmin().unwrap_err().is_empty_collection());
    assert!(empty.argmax().unwrap_err().is_empty_collection());
}

#[test]
fn test_copy_is_independent() {
    let mut mask = BitmaskArray::from_bools(bools(&[1, 0, 1, 0, 0, 1, 1, 1, 1]));
    let mut copied = mask.copy();
    assert_eq!(copied, mask);
    assert_ne!(copied.as_bytes().as_ptr(), mask.as_bytes().as_ptr());

    mask.set(1, true).unwrap();
    assert!(mask.get(1).unwrap());
    assert!(!copied.get(1).unwrap());

    copied.set(0, false).unwrap();
    assert!(mask.get(0).unwrap());
    assert!(!copied.get(0).unwrap());
}

#[test]
fn test_take() {
    let mask = BitmaskArray::from_bools([true, false, true, true]);
    let result = mask.take(&[3, 1, 2, 1, 0]).unwrap();
    assert_eq!(result.len(), 5);
    assert_eq!(collect(&result), vec![true, false, true, false, true]);

    let result = mask.take(&[-1, -4]).unwrap();
    assert_eq!(collect(&result), vec![true, true]);

    assert!(mask.take(&[]).unwrap().is_empty());
    assert!(mask.take(&[0, 1, 4]).unwrap_err().is_out_of_range());
    assert!(mask.take(&[-5]).unwrap_err().is_out_of_range());
}

#[test]
fn test_take_matches_reference() {
    let values = data_gen::random_bools(99, 301, 0.4);
    let mask = BitmaskArray::from(values.clone());
    let indices = data_gen::random_indices(5, values.len(), 999);
    let expected = reference::take(&values, &indices).unwrap();
    assert_eq!(collect(&mask.take(&indices).unwrap()), expected);
}

#[test]
fn test_assign() {
    let mut dst = BitmaskArray::zeroed(10);
    let src = BitmaskArray::from(data_gen::random_bools(4, 10, 0.5));
    dst.assign(&src).unwrap();
    assert_eq!(dst, src);

    let err = dst.assign(&BitmaskArray::zeroed(11)).unwrap_err();
    assert!(err.is_length_mismatch());
    assert_eq!(dst, src);
}

#[test]
fn test_fill() {
    let mut mask = BitmaskArray::from(data_gen::random_bools(8, 21, 0.5));
    mask.fill(true);
    assert!(mask.all());
    mask.fill(false);
    assert!(!mask.any());
    assert_eq!(mask.len(), 21);
}

#[test]
fn test_equality_ignores_padding() {
    let a = BitmaskArray::from_packed(vec![0xff, 0b0000_0001], 9).unwrap();
    let b = BitmaskArray::from_packed(vec![0xff, 0b1111_1111], 9).unwrap();
    let c = BitmaskArray::from_packed(vec![0xff, 0b1111_1110], 9).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(BitmaskArray::zeroed(8), BitmaskArray::zeroed(9));
}

#[test]
fn test_debug_format() {
    let mask = BitmaskArray::from_bools([true, false, true]);
    assert_eq!(
        format!("{mask:?}"),
        "BitmaskArray { len: 3, bits: \"101\" }"
    );
}

#[test]
fn test_binary_op_parse() {
    assert_eq!("and".parse::<BinaryOp>().unwrap(), BinaryOp::And);
    assert_eq!("OR".parse::<BinaryOp>().unwrap(), BinaryOp::Or);
    assert_eq!("^".parse::<BinaryOp>().unwrap(), BinaryOp::Xor);
    assert!("nand".parse::<BinaryOp>().is_err());
    assert_eq!(BinaryOp::Xor.to_string(), "xor");
}
