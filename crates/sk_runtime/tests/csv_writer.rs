use sk_runtime::csv::{CsvField, Dialect, QuoteStyle, Writer};
use sk_runtime::{Bytes, ErrorClass, ErrorKind};

fn written(w: Writer<Vec<u8>>) -> String {
    String::from_utf8(w.into_inner()).unwrap()
}

fn writer(d: Dialect) -> Writer<Vec<u8>> {
    Writer::new(Vec::new(), d).unwrap()
}

#[test]
fn minimal_quoting() {
    let mut w = writer(Dialect::excel());
    w.writerow(&["a", "b,c", "d\"e", ""]).unwrap();
    w.writerow(&["line\nbreak", "cr\r"]).unwrap();
    assert_eq!(
        written(w),
        "a,\"b,c\",\"d\"\"e\",\r\n\"line\nbreak\",\"cr\r\"\r\n"
    );
}

#[test]
fn single_empty_field_is_quoted() {
    let mut w = writer(Dialect::excel());
    w.writerow(&[""]).unwrap();
    w.writerow::<&str>(&[]).unwrap();
    w.writerow(&["", ""]).unwrap();
    assert_eq!(written(w), "\"\"\r\n\r\n,\r\n");
}

#[test]
fn line_breaks_are_quoted_whatever_the_terminator() {
    let mut w = writer(Dialect::excel().with_lineterminator("\n"));
    w.writerow(&["a\rb", "c"]).unwrap();
    w.writerow(&["d\ne"]).unwrap();
    assert_eq!(written(w), "\"a\rb\",c\n\"d\ne\"\n");

    let d = Dialect::excel()
        .with_lineterminator("\n")
        .with_quoting(QuoteStyle::None)
        .with_escapechar(Some('\\'));
    let mut w = writer(d);
    w.writerow(&["a\rb"]).unwrap();
    assert_eq!(written(w), "a\\\rb\n");
}

#[test]
fn quote_all_and_unix_terminator() {
    let mut w = writer(Dialect::unix());
    w.writerow(&["a", ""]).unwrap();
    assert_eq!(written(w), "\"a\",\"\"\n");
}

#[test]
fn nonnumeric_quotes_text_only() {
    let mut w = writer(Dialect::excel().with_quoting(QuoteStyle::NonNumeric));
    w.writerow(&[1i64, -20]).unwrap();
    w.writerow(&[1.5f64, 2.0]).unwrap();
    w.writerow(&["x", "3"]).unwrap();
    let mixed: [&dyn CsvField; 3] = [&7u32, &"y", &None::<i64>];
    w.writerow(&mixed).unwrap();
    assert_eq!(written(w), "1,-20\r\n1.5,2.0\r\n\"x\",3\r\n7,\"y\",\"\"\r\n");
}

#[test]
fn quote_none_escapes_specials() {
    let d = Dialect::excel()
        .with_quoting(QuoteStyle::None)
        .with_escapechar(Some('\\'));
    let mut w = writer(d);
    w.writerow(&["a,b", "c\"d", "e\\f", "g\nh"]).unwrap();
    assert_eq!(written(w), "a\\,b,c\\\"d,e\\\\f,g\\\nh\r\n");
}

#[test]
fn quote_none_without_escapechar() {
    let mut w = writer(Dialect::excel().with_quoting(QuoteStyle::None));
    w.writerow(&["plain"]).unwrap();
    let err = w.writerow(&["a,b"]).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::EscapeRequired));
    assert_eq!(err.to_string(), "need to escape, but no escapechar set");

    let err = w.writerow(&[""]).unwrap_err();
    assert_eq!(err.class(), ErrorClass::CsvError);
    assert_eq!(err.to_string(), "single empty field record must be quoted");
}

#[test]
fn quote_without_doublequote_uses_escape() {
    let d = Dialect::excel()
        .with_doublequote(false)
        .with_escapechar(Some('\\'));
    let mut w = writer(d);
    w.writerow(&["a\"b"]).unwrap();
    assert_eq!(written(w), "\"a\\\"b\"\r\n");

    let mut w = writer(Dialect::excel().with_doublequote(false));
    assert!(w.writerow(&["a\"b"]).is_err());
}

#[test]
fn tracks_row_arity() {
    let mut w = writer(Dialect::excel());
    assert_eq!(w.num_fields(), None);
    w.writerows(vec![vec!["a", "b"], vec!["c"], vec!["d", "e"]])
        .unwrap();
    assert_eq!(w.num_fields(), Some(2));
    assert_eq!(w.ragged_rows(), 1);
    assert_eq!(written(w), "a,b\r\nc\r\nd,e\r\n");
}

#[test]
fn format_row_does_not_write() {
    let mut w = writer(Dialect::excel());
    assert_eq!(w.format_row(&[true, false]).unwrap(), "True,False\r\n");
    assert!(w.get_ref().is_empty());
}

#[test]
fn bytes_fields_use_their_literal_form() {
    let mut w = writer(Dialect::excel());
    w.writerow(&[Bytes::from("hi")]).unwrap();
    assert_eq!(written(w), "b'hi'\r\n");
}

#[test]
fn writer_by_dialect_name() {
    let mut w = Writer::from_name(Vec::new(), "excel-tab").unwrap();
    w.writerow(&["a", "b\tc"]).unwrap();
    assert_eq!(written(w), "a\t\"b\tc\"\r\n");
    assert!(Writer::from_name(Vec::new(), "no-such-dialect").is_err());
}
