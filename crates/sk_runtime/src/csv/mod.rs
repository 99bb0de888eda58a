//! Dialect-driven CSV reading and writing.
//!
//! - `Dialect` / `QuoteStyle` - Formatting rules, fixed for a reader or writer's lifetime
//! - `Reader` - Record reader over any `LineSource`, driven by a character state machine
//! - `Writer` - Record writer over any `io::Write`
//! - `DictReader` / `DictWriter` - Records keyed by field name
//! - the dialect registry and the process-wide field size limit

pub mod dialect;
pub mod dict;
pub mod field;
pub mod reader;
pub mod registry;
pub mod writer;

use std::sync::atomic::{AtomicUsize, Ordering};

pub use dialect::{Dialect, QuoteStyle};
pub use dict::{DictReader, DictRow, DictWriter, ExtrasAction};
pub use field::CsvField;
pub use reader::{BufLines, LineSource, ParserState, Reader, ReaderConfig};
pub use registry::{
    DEFAULT_DIALECT, DialectProvider, DialectRegistry, StdDialectProvider, get_dialect,
    list_dialects, register_dialect, unregister_dialect,
};
pub use writer::Writer;

/// Longest field, in characters, a reader accepts unless told otherwise.
pub const DEFAULT_FIELD_SIZE_LIMIT: usize = 128 * 1024;

static FIELD_SIZE_LIMIT: AtomicUsize = AtomicUsize::new(DEFAULT_FIELD_SIZE_LIMIT);

pub fn field_size_limit() -> usize {
    FIELD_SIZE_LIMIT.load(Ordering::Relaxed)
}

/// Replace the process-wide limit and return the previous one.
///
/// Readers already constructed keep the limit they were built with.
pub fn set_field_size_limit(limit: usize) -> usize {
    let previous = FIELD_SIZE_LIMIT.swap(limit, Ordering::Relaxed);
    if previous != limit {
        log::debug!("csv field size limit {previous} -> {limit}");
    }
    previous
}
