//! Core types for the sk runtime.
//!
//! This crate contains the pieces every runtime component is built on:
//! - `Error` - Error taxonomy mirroring the source language's exception classes
//! - `SliceIndices` - The shared index/slice normalization primitive
//! - `Repr` - Literal-style textual representation of values
//! - `NaturalOrd` - Total natural ordering used by sorting
//! - `hash_bytes` - Deterministic content hashing

pub mod error;
pub mod hash;
pub mod order;
pub mod repr;
pub mod slice;

pub use error::{Error, ErrorClass, ErrorKind, Result};
pub use hash::{HASH_UNKNOWN, hash_bytes};
pub use order::NaturalOrd;
pub use repr::Repr;
pub use slice::{SliceIndices, clamp_index, wrap_index};
