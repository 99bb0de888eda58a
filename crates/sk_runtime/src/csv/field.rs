use sk_core::Repr;

use crate::bytes::Bytes;

/// A value the writer can render as one field.
pub trait CsvField {
    fn append_to(&self, out: &mut String);

    /// Numeric fields are left unquoted under `QuoteStyle::NonNumeric`.
    fn is_numeric(&self) -> bool;
}

pub(crate) fn parses_as_number(s: &str) -> bool {
    let t = s.trim();
    !t.is_empty() && t.parse::<f64>().is_ok()
}

impl CsvField for str {
    fn append_to(&self, out: &mut String) {
        out.push_str(self);
    }
    fn is_numeric(&self) -> bool {
        parses_as_number(self)
    }
}

impl CsvField for String {
    fn append_to(&self, out: &mut String) {
        out.push_str(self);
    }
    fn is_numeric(&self) -> bool {
        parses_as_number(self)
    }
}

impl<T: CsvField + ?Sized> CsvField for &T {
    fn append_to(&self, out: &mut String) {
        (**self).append_to(out)
    }
    fn is_numeric(&self) -> bool {
        (**self).is_numeric()
    }
}

impl<T: CsvField> CsvField for Option<T> {
    fn append_to(&self, out: &mut String) {
        if let Some(v) = self {
            v.append_to(out);
        }
    }
    fn is_numeric(&self) -> bool {
        self.as_ref().is_some_and(|v| v.is_numeric())
    }
}

macro_rules! int_field {
    ($($t:ty),* $(,)?) => {
        $(
            impl CsvField for $t {
                fn append_to(&self, out: &mut String) {
                    let mut buf = itoa::Buffer::new();
                    out.push_str(buf.format(*self));
                }
                fn is_numeric(&self) -> bool {
                    true
                }
            }
        )*
    };
}

int_field!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl CsvField for f64 {
    fn append_to(&self, out: &mut String) {
        self.write_repr(out);
    }
    fn is_numeric(&self) -> bool {
        true
    }
}

impl CsvField for bool {
    fn append_to(&self, out: &mut String) {
        self.write_repr(out);
    }
    fn is_numeric(&self) -> bool {
        true
    }
}

impl CsvField for Bytes {
    fn append_to(&self, out: &mut String) {
        self.write_repr(out);
    }
    fn is_numeric(&self) -> bool {
        false
    }
}
