//! Growable ordered sequence with the source language's list semantics.
//!
//! Indices wrap once from the end, slices clamp instead of failing, and
//! extended-slice assignment checks sizes before touching the buffer.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

use sk_core::{
    Error, ErrorKind, NaturalOrd, Repr, Result, SliceIndices, clamp_index, wrap_index,
};

const CONTAINER: &str = "list";

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct List<T> {
    units: Vec<T>,
}

/// How `List::sort_with` orders elements.
///
/// At most one of a comparator or a key function is active; `Natural` uses
/// the element type's own total order.
pub enum SortBy<'a, T, K = ()> {
    Natural(fn(&T, &T) -> Ordering),
    Comparator(&'a dyn Fn(&T, &T) -> Ordering),
    Key(&'a dyn Fn(&T) -> K),
}

impl<T: NaturalOrd> SortBy<'_, T> {
    pub fn natural() -> Self {
        SortBy::Natural(T::natural_cmp)
    }
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self { units: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            units: Vec::with_capacity(capacity),
        }
    }

    pub fn from_vec(units: Vec<T>) -> Self {
        Self { units }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.units
    }

    pub fn into_vec(self) -> Vec<T> {
        self.units
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.units.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.units.iter_mut()
    }

    pub fn clear(&mut self) {
        self.units.clear();
    }

    pub fn get(&self, i: i64) -> Result<&T> {
        wrap_index(i, self.units.len())
            .map(|i| &self.units[i])
            .ok_or_else(|| Error::index_out_of_range(CONTAINER))
    }

    pub fn get_mut(&mut self, i: i64) -> Result<&mut T> {
        match wrap_index(i, self.units.len()) {
            Some(i) => Ok(&mut self.units[i]),
            None => Err(Error::index_out_of_range(CONTAINER)),
        }
    }

    pub fn set(&mut self, i: i64, value: T) -> Result<()> {
        let i = wrap_index(i, self.units.len()).ok_or(ErrorKind::AssignmentOutOfRange {
            container: CONTAINER,
        })?;
        self.units[i] = value;
        Ok(())
    }

    /// Remove the element at `i`.
    pub fn delete(&mut self, i: i64) -> Result<()> {
        let i = wrap_index(i, self.units.len()).ok_or(ErrorKind::AssignmentOutOfRange {
            container: CONTAINER,
        })?;
        self.units.remove(i);
        Ok(())
    }

    /// Replace the addressed positions with `replacement`.
    ///
    /// A unit step splices, so the list may grow or shrink. Any other step
    /// requires `replacement` to have exactly as many items as positions
    /// touched, and the list is left untouched when it does not.
    pub fn set_slice<I>(
        &mut self,
        start: Option<i64>,
        stop: Option<i64>,
        step: Option<i64>,
        replacement: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let slice = SliceIndices::adjust(start, stop, step, self.units.len())?;
        let replacement: Vec<T> = replacement.into_iter().collect();
        if slice.is_contiguous() {
            self.units.splice(slice.range(), replacement);
            return Ok(());
        }
        if replacement.len() != slice.count {
            return Err(ErrorKind::ExtendedSliceSize {
                expected: slice.count,
                given: replacement.len(),
            }
            .into());
        }
        for (pos, value) in slice.indices().zip(replacement) {
            self.units[pos] = value;
        }
        Ok(())
    }

    /// Remove the addressed positions, keeping the rest in order.
    pub fn delete_slice(
        &mut self,
        start: Option<i64>,
        stop: Option<i64>,
        step: Option<i64>,
    ) -> Result<()> {
        let slice = SliceIndices::adjust(start, stop, step, self.units.len())?;
        if slice.is_contiguous() {
            self.units.drain(slice.range());
            return Ok(());
        }
        if slice.count == 0 {
            return Ok(());
        }
        let mut pos = 0usize;
        self.units.retain(|_| {
            let keep = !slice.covers(pos);
            pos += 1;
            keep
        });
        Ok(())
    }

    #[inline]
    pub fn append(&mut self, value: T) {
        self.units.push(value);
    }

    pub fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.units.extend(iter);
    }

    /// Insert before position `i`; out-of-range positions clamp to the ends.
    pub fn insert(&mut self, i: i64, value: T) {
        let i = clamp_index(i, self.units.len());
        self.units.insert(i, value);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.units.pop().ok_or_else(|| ErrorKind::PopFromEmpty.into())
    }

    pub fn pop_at(&mut self, i: i64) -> Result<T> {
        if self.units.is_empty() {
            return Err(ErrorKind::PopFromEmpty.into());
        }
        let i = wrap_index(i, self.units.len()).ok_or(ErrorKind::PopIndexOutOfRange)?;
        Ok(self.units.remove(i))
    }

    pub fn reverse(&mut self) {
        self.units.reverse();
    }

    /// Stable sort by the element type's natural order.
    pub fn sort(&mut self, reverse: bool)
    where
        T: NaturalOrd,
    {
        self.sort_with(SortBy::natural(), reverse);
    }

    pub fn sort_by(&mut self, cmp: impl Fn(&T, &T) -> Ordering, reverse: bool) {
        self.sort_with::<()>(SortBy::Comparator(&cmp), reverse);
    }

    pub fn sort_by_key<K: NaturalOrd>(&mut self, key: impl Fn(&T) -> K, reverse: bool) {
        self.sort_with(SortBy::Key(&key), reverse);
    }

    /// Stable sort. `reverse` flips the order of unequal elements only;
    /// equal elements keep their original relative order either way.
    pub fn sort_with<K: NaturalOrd>(&mut self, by: SortBy<'_, T, K>, reverse: bool) {
        match by {
            SortBy::Natural(cmp) => sort_units(&mut self.units, cmp, reverse),
            SortBy::Comparator(cmp) => sort_units(&mut self.units, cmp, reverse),
            SortBy::Key(key) => {
                let mut keyed: Vec<(K, T)> = std::mem::take(&mut self.units)
                    .into_iter()
                    .map(|v| (key(&v), v))
                    .collect();
                sort_units(&mut keyed, |a, b| a.0.natural_cmp(&b.0), reverse);
                self.units = keyed.into_iter().map(|(_, v)| v).collect();
            }
        }
    }
}

// Length of `n` copies of a `len`-long list, for `n >= 1`.
fn repeated_len(len: usize, n: i64) -> Result<usize> {
    usize::try_from(n)
        .ok()
        .and_then(|n| len.checked_mul(n))
        .ok_or_else(too_long)
}

fn too_long() -> Error {
    ErrorKind::RepeatTooLong {
        container: CONTAINER,
    }
    .into()
}

fn sort_units<T>(units: &mut [T], cmp: impl Fn(&T, &T) -> Ordering, reverse: bool) {
    if reverse {
        units.sort_by(|a, b| cmp(b, a));
    } else {
        units.sort_by(|a, b| cmp(a, b));
    }
}

impl<T: PartialEq> List<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.units.iter().any(|v| v == value)
    }

    pub fn count(&self, value: &T) -> usize {
        self.units.iter().filter(|v| *v == value).count()
    }

    pub fn index(&self, value: &T) -> Result<usize> {
        self.index_in(value, None, None)
    }

    /// Position of the first match in `[start, stop)`, bounds normalized as
    /// for a unit-step slice.
    pub fn index_in(&self, value: &T, start: Option<i64>, stop: Option<i64>) -> Result<usize> {
        let slice = SliceIndices::adjust(start, stop, None, self.units.len())?;
        let range = slice.range();
        let offset = range.start;
        self.units[range]
            .iter()
            .position(|v| v == value)
            .map(|p| p + offset)
            .ok_or_else(|| Error::not_found("list.index(x)"))
    }

    /// Remove the first element equal to `value`.
    pub fn remove(&mut self, value: &T) -> Result<()> {
        let pos = self
            .units
            .iter()
            .position(|v| v == value)
            .ok_or_else(|| Error::not_found("list.remove(x)"))?;
        self.units.remove(pos);
        Ok(())
    }
}

impl<T: Clone> List<T> {
    /// New list holding the addressed positions in walk order.
    pub fn slice(&self, start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Result<Self> {
        let slice = SliceIndices::adjust(start, stop, step, self.units.len())?;
        if slice.is_contiguous() {
            return Ok(Self::from_vec(self.units[slice.range()].to_vec()));
        }
        let mut out = Vec::with_capacity(slice.count);
        out.extend(slice.indices().map(|i| self.units[i].clone()));
        Ok(Self::from_vec(out))
    }

    pub fn concat(&self, other: &Self) -> Self {
        let mut units = Vec::with_capacity(self.units.len() + other.units.len());
        units.extend_from_slice(&self.units);
        units.extend_from_slice(&other.units);
        Self { units }
    }

    pub fn concat_in_place(&mut self, other: &Self) {
        self.units.extend_from_slice(&other.units);
    }

    /// `n` back-to-back copies; `n <= 0` yields an empty list.
    pub fn repeat(&self, n: i64) -> Result<Self> {
        if n <= 0 || self.units.is_empty() {
            return Ok(Self::new());
        }
        let total = repeated_len(self.units.len(), n)?;
        let mut units = Vec::new();
        units.try_reserve_exact(total).map_err(|_| too_long())?;
        for _ in 0..n {
            units.extend_from_slice(&self.units);
        }
        Ok(Self { units })
    }

    pub fn repeat_in_place(&mut self, n: i64) -> Result<()> {
        if n <= 0 {
            self.units.clear();
            return Ok(());
        }
        if self.units.is_empty() {
            return Ok(());
        }
        let len = self.units.len();
        let total = repeated_len(len, n)?;
        self.units
            .try_reserve_exact(total - len)
            .map_err(|_| too_long())?;
        for _ in 1..n {
            self.units.extend_from_within(..len);
        }
        Ok(())
    }

    /// Shallow duplicate: a new buffer holding the same element values.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(units: Vec<T>) -> Self {
        Self { units }
    }
}

impl<T> AsRef<[T]> for List<T> {
    fn as_ref(&self) -> &[T] {
        &self.units
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            units: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.units.extend(iter);
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

impl<T: Clone> Add<&List<T>> for &List<T> {
    type Output = List<T>;

    fn add(self, rhs: &List<T>) -> List<T> {
        self.concat(rhs)
    }
}

impl<T: NaturalOrd> NaturalOrd for List<T> {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.units.as_slice().natural_cmp(other.units.as_slice())
    }
}

impl<T: Repr> Repr for List<T> {
    fn write_repr(&self, out: &mut String) {
        out.push('[');
        for (i, v) in self.units.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            v.write_repr(out);
        }
        out.push(']');
    }
}

impl<T: Repr> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.units.iter()).finish()
    }
}
