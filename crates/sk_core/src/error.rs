//! Runtime error taxonomy.
//!
//! Every failure raised by the runtime carries an `ErrorKind` whose message
//! follows the wording generated programs expect, and an `ErrorClass` naming
//! the exception class the caller should raise.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

/// Exception class an error maps to in generated code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    IndexError,
    ValueError,
    TypeError,
    CsvError,
    MemoryError,
    IoError,
}

impl ErrorClass {
    pub fn name(self) -> &'static str {
        match self {
            ErrorClass::IndexError => "IndexError",
            ErrorClass::ValueError => "ValueError",
            ErrorClass::TypeError => "TypeError",
            ErrorClass::CsvError => "Error",
            ErrorClass::MemoryError => "MemoryError",
            ErrorClass::IoError => "OSError",
        }
    }
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn class(&self) -> ErrorClass {
        self.0.class()
    }

    pub fn index_out_of_range(container: &'static str) -> Error {
        ErrorKind::IndexOutOfRange { container }.into()
    }

    pub fn not_found(op: &'static str) -> Error {
        ErrorKind::NotFound { op }.into()
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        ErrorKind::Io {
            context: context.into(),
            source,
        }
        .into()
    }

    pub fn invalid_dialect(message: impl Into<String>) -> Error {
        ErrorKind::InvalidDialect {
            message: message.into(),
        }
        .into()
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    // Index
    #[error("{container} index out of range")]
    IndexOutOfRange { container: &'static str },

    #[error("{container} assignment index out of range")]
    AssignmentOutOfRange { container: &'static str },

    #[error("pop from empty list")]
    PopFromEmpty,

    #[error("pop index out of range")]
    PopIndexOutOfRange,

    // Value
    #[error("{op}: x not in list")]
    NotFound { op: &'static str },

    #[error("slice step cannot be zero")]
    ZeroSliceStep,

    #[error("repeated {container} is too long")]
    RepeatTooLong { container: &'static str },

    #[error("attempt to assign sequence of size {given} to extended slice of size {expected}")]
    ExtendedSliceSize { expected: usize, given: usize },

    #[error("could not convert string to float: '{field}'")]
    NotNumeric { field: String },

    #[error("dict contains fields not in fieldnames: {}", quoted_list(.fields))]
    ExtraFields { fields: Vec<String> },

    #[error("{message}")]
    InvalidDialect { message: String },

    // Type
    #[error("'bytes' object does not support item assignment")]
    FrozenBytes,

    // Csv
    #[error("need to escape, but no escapechar set")]
    EscapeRequired,

    #[error("single empty field record must be quoted")]
    EmptyFieldUnquoted,

    #[error("field larger than field limit ({limit})")]
    FieldLimit { limit: usize },

    #[error("'{delimiter}' expected after '{quote}'")]
    DelimiterExpected { delimiter: char, quote: char },

    #[error("new-line character seen in unquoted field")]
    NewlineInUnquoted,

    #[error("unexpected end of data")]
    UnexpectedEnd,

    #[error("line contains NUL")]
    NulInLine,

    #[error("unknown dialect")]
    UnknownDialect { name: String },

    // Io
    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl ErrorKind {
    pub fn class(&self) -> ErrorClass {
        match self {
            ErrorKind::IndexOutOfRange { .. }
            | ErrorKind::AssignmentOutOfRange { .. }
            | ErrorKind::PopFromEmpty
            | ErrorKind::PopIndexOutOfRange => ErrorClass::IndexError,
            ErrorKind::NotFound { .. }
            | ErrorKind::ZeroSliceStep
            | ErrorKind::ExtendedSliceSize { .. }
            | ErrorKind::NotNumeric { .. }
            | ErrorKind::ExtraFields { .. }
            | ErrorKind::InvalidDialect { .. } => ErrorClass::ValueError,
            ErrorKind::FrozenBytes => ErrorClass::TypeError,
            ErrorKind::RepeatTooLong { .. } => ErrorClass::MemoryError,
            ErrorKind::EscapeRequired
            | ErrorKind::EmptyFieldUnquoted
            | ErrorKind::FieldLimit { .. }
            | ErrorKind::DelimiterExpected { .. }
            | ErrorKind::NewlineInUnquoted
            | ErrorKind::UnexpectedEnd
            | ErrorKind::NulInLine
            | ErrorKind::UnknownDialect { .. } => ErrorClass::CsvError,
            ErrorKind::Io { .. } => ErrorClass::IoError,
        }
    }
}

fn quoted_list(items: &[String]) -> String {
    items
        .iter()
        .map(|s| format!("'{}'", s))
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io("", e)
    }
}
