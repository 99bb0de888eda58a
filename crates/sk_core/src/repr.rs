//! Literal-style textual representation.
//!
//! `Repr` renders a value the way the source language prints it inside a
//! container: strings and byte strings quoted and escaped, numbers in their
//! shortest round-trip form.

pub trait Repr {
    fn write_repr(&self, out: &mut String);

    fn repr(&self) -> String {
        let mut out = String::new();
        self.write_repr(&mut out);
        out
    }
}

/// Pick the delimiter for a quoted literal.
///
/// Single quotes are preferred; double quotes are used only when the content
/// has a single quote and no double quote. The second value says whether the
/// chosen delimiter has to be escaped inside the literal.
pub fn choose_quote(has_single: bool, has_double: bool) -> (char, bool) {
    if has_single && !has_double {
        ('"', false)
    } else {
        ('\'', has_single)
    }
}

/// Append the two-hex-digit escape of a byte.
#[inline]
pub fn push_hex_escape(out: &mut String, b: u8) {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    out.push_str("\\x");
    out.push(HEX[(b >> 4) as usize] as char);
    out.push(HEX[(b & 0xf) as usize] as char);
}

macro_rules! repr_via_itoa {
    ($($t:ty),* $(,)?) => {
        $(
            impl Repr for $t {
                fn write_repr(&self, out: &mut String) {
                    let mut buf = itoa::Buffer::new();
                    out.push_str(buf.format(*self));
                }
            }
        )*
    };
}

repr_via_itoa!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Repr for f64 {
    fn write_repr(&self, out: &mut String) {
        let f = *self;
        if f.is_nan() {
            out.push_str("nan");
            return;
        }
        if f.is_infinite() {
            out.push_str(if f < 0.0 { "-inf" } else { "inf" });
            return;
        }
        let mut buf = ryu::Buffer::new();
        let s = buf.format_finite(f);
        if s.contains('e') {
            push_exponent_form(out, s);
        } else if f != 0.0 && f.abs() < 1e-4 {
            // Positional form stops at 1e-4.
            push_exponent_form(out, &format!("{f:e}"));
        } else {
            out.push_str(s);
        }
    }
}

// `1e16` becomes `1e+16`, `1e-5` becomes `1e-05`.
fn push_exponent_form(out: &mut String, s: &str) {
    let Some(pos) = s.find('e') else {
        out.push_str(s);
        return;
    };
    out.push_str(&s[..pos + 1]);
    let exp = &s[pos + 1..];
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exp),
    };
    out.push(sign);
    if digits.len() < 2 {
        out.push('0');
    }
    out.push_str(digits);
}

impl Repr for f32 {
    fn write_repr(&self, out: &mut String) {
        (*self as f64).write_repr(out)
    }
}

impl Repr for bool {
    fn write_repr(&self, out: &mut String) {
        out.push_str(if *self { "True" } else { "False" });
    }
}

impl Repr for str {
    fn write_repr(&self, out: &mut String) {
        let (quote, escape_quote) = choose_quote(self.contains('\''), self.contains('"'));
        out.push(quote);
        for c in self.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c == quote && escape_quote => {
                    out.push('\\');
                    out.push(c);
                }
                c if (c as u32) < 0x20 || c as u32 == 0x7f => push_hex_escape(out, c as u8),
                c => out.push(c),
            }
        }
        out.push(quote);
    }
}

impl Repr for String {
    fn write_repr(&self, out: &mut String) {
        self.as_str().write_repr(out)
    }
}

impl<T: Repr + ?Sized> Repr for &T {
    fn write_repr(&self, out: &mut String) {
        (**self).write_repr(out)
    }
}

impl<T: Repr> Repr for Option<T> {
    fn write_repr(&self, out: &mut String) {
        match self {
            Some(v) => v.write_repr(out),
            None => out.push_str("None"),
        }
    }
}

impl<A: Repr, B: Repr> Repr for (A, B) {
    fn write_repr(&self, out: &mut String) {
        out.push('(');
        self.0.write_repr(out);
        out.push_str(", ");
        self.1.write_repr(out);
        out.push(')');
    }
}
