use sk_core::{Error, ErrorClass, ErrorKind, HASH_UNKNOWN, NaturalOrd, Repr, hash_bytes};
use std::cmp::Ordering;

#[test]
fn string_repr_picks_quotes() {
    assert_eq!("abc".repr(), "'abc'");
    assert_eq!("it's".repr(), "\"it's\"");
    assert_eq!("say \"hi\"".repr(), "'say \"hi\"'");
    assert_eq!("it's \"x\"".repr(), "'it\\'s \"x\"'");
    assert_eq!("a\nb\t\\".repr(), "'a\\nb\\t\\\\'");
    assert_eq!("\u{1}".repr(), "'\\x01'");
}

#[test]
fn number_repr() {
    assert_eq!(42i64.repr(), "42");
    assert_eq!((-7i32).repr(), "-7");
    assert_eq!(1.0f64.repr(), "1.0");
    assert_eq!(0.5f64.repr(), "0.5");
    assert_eq!(1e16f64.repr(), "1e+16");
    assert_eq!(1.5e-7f64.repr(), "1.5e-07");
    assert_eq!(0.00001f64.repr(), "1e-05");
    assert_eq!(0.0001f64.repr(), "0.0001");
    assert_eq!(f64::NAN.repr(), "nan");
    assert_eq!(f64::NEG_INFINITY.repr(), "-inf");
    assert_eq!(true.repr(), "True");
    assert_eq!(None::<i64>.repr(), "None");
    assert_eq!((1i64, "a").repr(), "(1, 'a')");
}

#[test]
fn natural_order_is_total_for_floats() {
    assert_eq!(1.0f64.natural_cmp(&2.0), Ordering::Less);
    assert_eq!(f64::NAN.natural_cmp(&f64::NAN), Ordering::Equal);
    assert_eq!(vec![1, 2].natural_cmp(&vec![1, 2, 0]), Ordering::Less);
    assert_eq!(("b", 1).natural_cmp(&("a", 9)), Ordering::Greater);
}

#[test]
fn hashing_is_deterministic_and_avoids_sentinel() {
    assert_eq!(hash_bytes(b"abc"), hash_bytes(b"abc"));
    assert_ne!(hash_bytes(b"abc"), hash_bytes(b"abd"));
    assert_ne!(hash_bytes(b""), HASH_UNKNOWN);
}

#[test]
fn error_messages_and_classes() {
    let e = Error::index_out_of_range("list");
    assert_eq!(e.to_string(), "list index out of range");
    assert_eq!(e.class(), ErrorClass::IndexError);

    let e = Error::not_found("list.remove(x)");
    assert_eq!(e.to_string(), "list.remove(x): x not in list");
    assert_eq!(e.class().name(), "ValueError");

    let e: Error = ErrorKind::ExtendedSliceSize {
        expected: 3,
        given: 2,
    }
    .into();
    assert_eq!(
        e.to_string(),
        "attempt to assign sequence of size 2 to extended slice of size 3"
    );

    let e: Error = ErrorKind::DelimiterExpected {
        delimiter: ',',
        quote: '"',
    }
    .into();
    assert_eq!(e.to_string(), "',' expected after '\"'");
    assert_eq!(e.class(), ErrorClass::CsvError);

    let e: Error = ErrorKind::ExtraFields {
        fields: vec!["x".into(), "y".into()],
    }
    .into();
    assert_eq!(e.to_string(), "dict contains fields not in fieldnames: 'x', 'y'");

    let e: Error = ErrorKind::FrozenBytes.into();
    assert_eq!(e.class(), ErrorClass::TypeError);
    assert!(matches!(e.into_kind(), ErrorKind::FrozenBytes));
}
