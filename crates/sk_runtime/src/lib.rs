//! sk runtime library.
//!
//! Value types and I/O helpers that compiled programs link against:
//! - `List` - Growable ordered sequence with wraparound indexing and slice assignment
//! - `Bytes` - Byte string or growable byte buffer with a memoized hash
//! - `csv` - Dialect-driven CSV reader and writer

#![allow(clippy::should_implement_trait)]

pub mod bytes;
pub mod csv;
pub mod list;

pub use bytes::Bytes;
pub use list::{List, SortBy};
pub use sk_core::{Error, ErrorClass, ErrorKind, NaturalOrd, Repr, Result};
