use sk_runtime::csv::{
    self, DEFAULT_DIALECT, Dialect, DialectProvider, DialectRegistry, QuoteStyle, Reader,
    StdDialectProvider,
};
use sk_runtime::{ErrorClass, ErrorKind};

#[test]
fn builtin_dialects_are_listed() {
    let names = csv::list_dialects();
    for name in [DEFAULT_DIALECT, "excel-tab", "unix"] {
        assert!(names.contains(&name.to_string()), "missing {name}");
    }
    let unix = csv::get_dialect("unix").unwrap();
    assert_eq!(unix.lineterminator, "\n");
    assert_eq!(unix.quoting, QuoteStyle::All);
    assert_eq!(*csv::get_dialect("excel").unwrap(), Dialect::default());
}

#[test]
fn register_use_and_unregister() {
    let pipes = Dialect::excel().with_delimiter('|');
    csv::register_dialect("test-pipes", pipes).unwrap();
    assert!(csv::list_dialects().contains(&"test-pipes".to_string()));

    let mut reader = Reader::from_name(vec!["a|b,c\n"].into_iter(), "test-pipes").unwrap();
    assert_eq!(reader.next_record().unwrap().unwrap().as_slice(), &["a", "b,c"]);
    assert_eq!(reader.dialect().delimiter, '|');

    csv::unregister_dialect("test-pipes").unwrap();
    assert!(!csv::list_dialects().contains(&"test-pipes".to_string()));
    let err = csv::get_dialect("test-pipes").unwrap_err();
    assert_eq!(err.class(), ErrorClass::CsvError);
    assert_eq!(err.to_string(), "unknown dialect");
    assert!(csv::unregister_dialect("test-pipes").is_err());
}

#[test]
fn registering_invalid_dialect_fails() {
    let bad = Dialect::excel().with_delimiter('"');
    let err = csv::register_dialect("test-bad", bad).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidDialect { .. }));
    assert!(csv::get_dialect("test-bad").is_err());
}

#[test]
fn readers_keep_their_dialect_after_unregister() {
    csv::register_dialect("test-semi", Dialect::excel().with_delimiter(';')).unwrap();
    let mut reader = Reader::from_name(vec!["1;2\n", "3;4\n"].into_iter(), "test-semi").unwrap();
    assert_eq!(reader.next_record().unwrap().unwrap().len(), 2);
    csv::unregister_dialect("test-semi").unwrap();
    assert_eq!(reader.next_record().unwrap().unwrap().as_slice(), &["3", "4"]);
}

#[test]
fn local_registry_keeps_insertion_order() {
    let mut reg = DialectRegistry::new();
    StdDialectProvider.install(&mut reg).unwrap();
    reg.register("zz", Dialect::excel()).unwrap();
    reg.register("aa", Dialect::unix()).unwrap();
    assert_eq!(reg.names(), vec!["excel", "excel-tab", "unix", "zz", "aa"]);
    reg.unregister("excel-tab").unwrap();
    assert_eq!(reg.names(), vec!["excel", "unix", "zz", "aa"]);
    assert_eq!(reg.get("aa").unwrap().quoting, QuoteStyle::All);
}

#[test]
fn validate_rejects_conflicting_characters() {
    assert!(Dialect::excel().validate().is_ok());
    assert!(Dialect::excel().with_escapechar(Some(',')).validate().is_err());
    assert!(Dialect::excel().with_escapechar(Some('"')).validate().is_err());
    assert!(Dialect::excel().with_delimiter('\n').validate().is_err());
    assert!(Dialect::excel().with_lineterminator("").validate().is_err());
    let no_quotes = Dialect::excel()
        .with_quotechar(None)
        .with_quoting(QuoteStyle::None);
    assert!(no_quotes.validate().is_ok());
}
