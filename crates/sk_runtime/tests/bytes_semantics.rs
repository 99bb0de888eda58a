use std::collections::HashSet;

use proptest::prelude::*;
use sk_runtime::{Bytes, ErrorClass, Repr};

#[test]
fn repr_picks_quotes_and_escapes() {
    assert_eq!(Bytes::from("abc").repr(), "b'abc'");
    assert_eq!(Bytes::from("it's").repr(), "b\"it's\"");
    assert_eq!(Bytes::from("it's \"x\"").repr(), "b'it\\'s \"x\"'");
    assert_eq!(Bytes::from(vec![0u8, b'\n', 0xff, b'\\']).repr(), "b'\\x00\\n\\xff\\\\'");
    assert_eq!(Bytes::new().repr(), "b''");
}

#[test]
fn display_distinguishes_growable() {
    assert_eq!(Bytes::from("ab").to_string(), "b'ab'");
    let mut buf = Bytes::new_growable();
    buf.extend_from_slice(b"ab").unwrap();
    assert_eq!(buf.to_string(), "bytearray(b'ab')");
}

#[test]
fn escape_without_prefix() {
    assert_eq!(Bytes::from("a'b").escape(), "a'b");
    assert_eq!(Bytes::from("a'\"b").escape(), "a\\'\"b");
    assert_eq!(Bytes::from(vec![7u8]).escape(), "\\x07");
}

#[test]
fn equality_and_hash_follow_content() {
    let a = Bytes::from("hello");
    let b = Bytes::from(b"hello".as_slice());
    assert_eq!(a.hash_value(), b.hash_value());
    assert_eq!(a, b);
    assert_ne!(a, Bytes::from("hellp"));
    assert_ne!(a, Bytes::from("hell"));

    let frozen = Bytes::from("x");
    let growable = Bytes::from_bytes(&frozen, false);
    assert_eq!(frozen, growable);

    let set: HashSet<Bytes> = [a.clone(), b, Bytes::from("other")].into_iter().collect();
    assert_eq!(set.len(), 2);
    assert!(set.contains(&a));
}

#[test]
fn mutation_resets_the_memoized_hash() {
    let mut buf = Bytes::new_growable();
    buf.extend_from_slice(b"ab").unwrap();
    let before = buf.hash_value();
    buf.push(b'c').unwrap();
    assert_ne!(buf.hash_value(), before);
    assert_eq!(buf.hash_value(), Bytes::from("abc").hash_value());
    assert_eq!(buf, Bytes::from("abc"));
}

#[test]
fn frozen_bytes_reject_mutation() {
    let mut b = Bytes::from("ab");
    let err = b.push(b'c').unwrap_err();
    assert_eq!(err.class(), ErrorClass::TypeError);
    assert!(b.extend_from_slice(b"x").is_err());
    assert_eq!(b.as_bytes(), b"ab");

    b.concat_in_place(&Bytes::from("cd"));
    assert_eq!(b.as_bytes(), b"abcd");
    assert!(b.is_frozen());
}

#[test]
fn indexing_slicing_and_search() {
    let b = Bytes::from("abcdef");
    assert_eq!(b.get(-1).unwrap(), b'f');
    assert_eq!(b.get(6).unwrap_err().to_string(), "bytes index out of range");
    assert_eq!(b.slice(Some(1), Some(4), None).unwrap().as_bytes(), b"bcd");
    assert_eq!(b.slice(None, None, Some(-2)).unwrap().as_bytes(), b"fdb");
    assert_eq!(b.find(b"cd", 0), Some(2));
    assert_eq!(b.find(b"cd", 3), None);
    assert_eq!(b.find(b"", 6), Some(6));
    assert_eq!(b.concat(&Bytes::from("!")).as_bytes(), b"abcdef!");
}

#[test]
fn raw_parts_copy_the_buffer() {
    let src = vec![1u8, 2, 3];
    let b = unsafe { Bytes::from_raw_parts(src.as_ptr(), src.len()) };
    drop(src);
    assert_eq!(b.as_bytes(), &[1, 2, 3]);
    let empty = unsafe { Bytes::from_raw_parts(std::ptr::null(), 0) };
    assert!(empty.is_empty());
}

proptest! {
    #[test]
    fn equal_contents_hash_equal(v in proptest::collection::vec(any::<u8>(), 0..64)) {
        let a = Bytes::from(v.clone());
        let b = Bytes::from_bytes(&a, false);
        prop_assert_eq!(a.hash_value(), b.hash_value());
        prop_assert_eq!(a.hash_value(), a.hash_value());
        prop_assert!(a == b);
    }

    #[test]
    fn equality_matches_slice_equality(
        x in proptest::collection::vec(0u8..4, 0..6),
        y in proptest::collection::vec(0u8..4, 0..6),
    ) {
        let (a, b) = (Bytes::from(x.clone()), Bytes::from(y.clone()));
        a.hash_value();
        prop_assert_eq!(a == b, x == y);
    }
}
