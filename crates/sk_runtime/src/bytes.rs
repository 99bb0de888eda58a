//! Byte string with a memoized content hash.
//!
//! A frozen `Bytes` is an immutable byte string; an unfrozen one is a
//! growable byte buffer. Both cache their hash in a `Cell`, and every
//! mutation resets the cache.

use std::cell::Cell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use sk_core::repr::{choose_quote, push_hex_escape};
use sk_core::{
    Error, ErrorKind, HASH_UNKNOWN, NaturalOrd, Repr, Result, SliceIndices, hash_bytes,
    wrap_index,
};

#[derive(Clone)]
pub struct Bytes {
    unit: Vec<u8>,
    frozen: bool,
    hash: Cell<u64>,
}

impl Bytes {
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Empty growable buffer.
    pub fn new_growable() -> Self {
        Self::with_frozen(Vec::new(), false)
    }

    pub fn from_vec(unit: Vec<u8>) -> Self {
        Self::with_frozen(unit, true)
    }

    pub fn with_frozen(unit: Vec<u8>, frozen: bool) -> Self {
        Self {
            unit,
            frozen,
            hash: Cell::new(HASH_UNKNOWN),
        }
    }

    /// Copy of `other` with its own mutability.
    pub fn from_bytes(other: &Bytes, frozen: bool) -> Self {
        Self::with_frozen(other.unit.clone(), frozen)
    }

    /// Copy `len` bytes starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `len` bytes, or `len` must be zero.
    pub unsafe fn from_raw_parts(ptr: *const u8, len: usize) -> Self {
        if len == 0 {
            return Self::new();
        }
        // SAFETY: the caller guarantees `ptr..ptr+len` is readable.
        let src = unsafe { std::slice::from_raw_parts(ptr, len) };
        Self::from_vec(src.to_vec())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.unit.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.unit.is_empty()
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.unit
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.unit
    }

    pub fn get(&self, i: i64) -> Result<u8> {
        wrap_index(i, self.unit.len())
            .map(|i| self.unit[i])
            .ok_or_else(|| Error::index_out_of_range("bytes"))
    }

    pub fn slice(&self, start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Result<Self> {
        let slice = SliceIndices::adjust(start, stop, step, self.unit.len())?;
        let unit = if slice.is_contiguous() {
            self.unit[slice.range()].to_vec()
        } else {
            slice.indices().map(|i| self.unit[i]).collect()
        };
        Ok(Self::with_frozen(unit, self.frozen))
    }

    /// Offset of the first occurrence of `needle` at or after `start`.
    pub fn find(&self, needle: &[u8], start: usize) -> Option<usize> {
        if start > self.unit.len() {
            return None;
        }
        if needle.is_empty() {
            return Some(start);
        }
        self.unit[start..]
            .windows(needle.len())
            .position(|w| w == needle)
            .map(|p| p + start)
    }

    pub fn concat(&self, other: &Bytes) -> Self {
        let mut unit = Vec::with_capacity(self.unit.len() + other.unit.len());
        unit.extend_from_slice(&self.unit);
        unit.extend_from_slice(&other.unit);
        Self::with_frozen(unit, self.frozen)
    }

    /// Content hash, computed on first use and cached.
    pub fn hash_value(&self) -> u64 {
        let cached = self.hash.get();
        if cached != HASH_UNKNOWN {
            return cached;
        }
        let h = hash_bytes(&self.unit);
        self.hash.set(h);
        h
    }

    pub fn push(&mut self, b: u8) -> Result<()> {
        self.unit_mut()?.push(b);
        Ok(())
    }

    pub fn extend_from_slice(&mut self, bytes: &[u8]) -> Result<()> {
        self.unit_mut()?.extend_from_slice(bytes);
        Ok(())
    }

    /// `+=`: frozen values rebind to a fresh concatenation, growable ones
    /// append in place.
    pub fn concat_in_place(&mut self, other: &Bytes) {
        if self.frozen {
            *self = self.concat(other);
        } else {
            self.unit.extend_from_slice(&other.unit);
            self.hash.set(HASH_UNKNOWN);
        }
    }

    fn unit_mut(&mut self) -> Result<&mut Vec<u8>> {
        if self.frozen {
            return Err(ErrorKind::FrozenBytes.into());
        }
        self.hash.set(HASH_UNKNOWN);
        Ok(&mut self.unit)
    }

    /// Escaped body of the literal form, without prefix or quotes.
    ///
    /// The single quote is escaped only when both quote kinds occur.
    pub fn escape(&self) -> String {
        let has_single = self.unit.contains(&b'\'');
        let has_double = self.unit.contains(&b'"');
        let mut out = String::with_capacity(self.unit.len());
        write_escaped(&mut out, &self.unit, '\'', has_single && has_double);
        out
    }
}

fn write_escaped(out: &mut String, unit: &[u8], quote: char, escape_quote: bool) {
    for &b in unit {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b if b as char == quote && escape_quote => {
                out.push('\\');
                out.push(quote);
            }
            0x20..=0x7e => out.push(b as char),
            b => push_hex_escape(out, b),
        }
    }
}

impl Repr for Bytes {
    fn write_repr(&self, out: &mut String) {
        let (quote, escape_quote) =
            choose_quote(self.unit.contains(&b'\''), self.unit.contains(&b'"'));
        out.reserve(self.unit.len() + 3);
        out.push('b');
        out.push(quote);
        write_escaped(out, &self.unit, quote, escape_quote);
        out.push(quote);
    }
}

impl Default for Bytes {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Bytes {
    fn eq(&self, other: &Self) -> bool {
        if self.unit.len() != other.unit.len() {
            return false;
        }
        let (h1, h2) = (self.hash.get(), other.hash.get());
        if h1 != HASH_UNKNOWN && h2 != HASH_UNKNOWN && h1 != h2 {
            return false;
        }
        self.unit == other.unit
    }
}

impl Eq for Bytes {}

impl Hash for Bytes {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

impl NaturalOrd for Bytes {
    fn natural_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.unit.cmp(&other.unit)
    }
}

impl fmt::Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frozen {
            f.write_str(&self.repr())
        } else {
            write!(f, "bytearray({})", self.repr())
        }
    }
}

impl fmt::Debug for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

impl Deref for Bytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.unit
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.unit
    }
}

impl From<&str> for Bytes {
    fn from(value: &str) -> Self {
        Self::from_vec(value.as_bytes().to_vec())
    }
}

impl From<String> for Bytes {
    fn from(value: String) -> Self {
        Self::from_vec(value.into_bytes())
    }
}

impl From<&[u8]> for Bytes {
    fn from(value: &[u8]) -> Self {
        Self::from_vec(value.to_vec())
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(value: Vec<u8>) -> Self {
        Self::from_vec(value)
    }
}
