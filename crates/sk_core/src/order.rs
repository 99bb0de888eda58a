//! Natural ordering of element types.
//!
//! Sorting without a comparator or key needs a total order over the element
//! type. Integers, text and booleans use their `Ord`; floats use IEEE total
//! ordering so a NaN never breaks the sort.

use std::cmp::Ordering;

pub trait NaturalOrd {
    fn natural_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! natural_ord_via_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl NaturalOrd for $t {
                #[inline]
                fn natural_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

natural_ord_via_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, (), String, str,
);

impl NaturalOrd for f64 {
    #[inline]
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl NaturalOrd for f32 {
    #[inline]
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl<T: NaturalOrd + ?Sized> NaturalOrd for &T {
    #[inline]
    fn natural_cmp(&self, other: &Self) -> Ordering {
        (**self).natural_cmp(*other)
    }
}

impl<T: NaturalOrd + ?Sized> NaturalOrd for Box<T> {
    #[inline]
    fn natural_cmp(&self, other: &Self) -> Ordering {
        (**self).natural_cmp(other)
    }
}

impl<T: NaturalOrd> NaturalOrd for Option<T> {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.natural_cmp(b),
        }
    }
}

impl<T: NaturalOrd> NaturalOrd for [T] {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.iter().zip(other.iter()) {
            match a.natural_cmp(b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        self.len().cmp(&other.len())
    }
}

impl<T: NaturalOrd> NaturalOrd for Vec<T> {
    #[inline]
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.as_slice().natural_cmp(other.as_slice())
    }
}

impl<A: NaturalOrd, B: NaturalOrd> NaturalOrd for (A, B) {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.0
            .natural_cmp(&other.0)
            .then_with(|| self.1.natural_cmp(&other.1))
    }
}

impl<A: NaturalOrd, B: NaturalOrd, C: NaturalOrd> NaturalOrd for (A, B, C) {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.0
            .natural_cmp(&other.0)
            .then_with(|| self.1.natural_cmp(&other.1))
            .then_with(|| self.2.natural_cmp(&other.2))
    }
}
