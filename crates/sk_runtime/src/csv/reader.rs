//! Character-level CSV parser.
//!
//! Each input line is fed through the state machine one character at a time,
//! followed by an end-of-line marker. A record is complete when the machine
//! is back in `StartRecord` after a line; otherwise the next line continues
//! the same record.

use std::io::BufRead;
use std::sync::Arc;

use sk_core::{Error, ErrorKind, Result};

use super::dialect::{Dialect, QuoteStyle};
use super::field::parses_as_number;
use super::{field_size_limit, registry};
use crate::list::List;

/// A lazy, finite, non-restartable sequence of text lines.
///
/// Lines keep their terminators when the source has them; a line without
/// one is treated as ending where it ends.
pub trait LineSource {
    fn next_line(&mut self) -> Option<Result<String>>;
}

impl<I> LineSource for I
where
    I: Iterator,
    I::Item: Into<String>,
{
    fn next_line(&mut self) -> Option<Result<String>> {
        self.next().map(|line| Ok(line.into()))
    }
}

/// Lines of a buffered reader, terminators included.
pub struct BufLines<R> {
    inner: R,
}

impl<R: BufRead> BufLines<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: BufRead> LineSource for BufLines<R> {
    fn next_line(&mut self) -> Option<Result<String>> {
        let mut line = String::new();
        match self.inner.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(Ok(line)),
            Err(e) => Some(Err(Error::io("csv input", e))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParserState {
    StartRecord,
    StartField,
    EscapedChar,
    InField,
    InQuotedField,
    EscapeInQuotedField,
    QuoteInQuotedField,
    EatCrnl,
    AfterEscapedCrnl,
}

#[derive(Clone, Copy, Debug)]
pub struct ReaderConfig {
    pub field_size_limit: usize,
}

impl Default for ReaderConfig {
    /// Snapshot of the process-wide field size limit.
    fn default() -> Self {
        Self {
            field_size_limit: field_size_limit(),
        }
    }
}

// Dialect fields consulted per character, copied out of the shared dialect.
#[derive(Clone, Copy)]
struct Rules {
    delimiter: char,
    quotechar: Option<char>,
    escapechar: Option<char>,
    doublequote: bool,
    skipinitialspace: bool,
    quoting: QuoteStyle,
    strict: bool,
}

impl Rules {
    fn new(d: &Dialect) -> Self {
        Self {
            delimiter: d.delimiter,
            quotechar: d.quotechar,
            escapechar: d.escapechar,
            doublequote: d.doublequote,
            skipinitialspace: d.skipinitialspace,
            quoting: d.quoting,
            strict: d.strict,
        }
    }

    #[inline]
    fn is_quote(&self, c: char) -> bool {
        self.quoting != QuoteStyle::None && self.quotechar == Some(c)
    }

    #[inline]
    fn is_escape(&self, c: char) -> bool {
        self.escapechar == Some(c)
    }
}

/// Forward-only record reader.
///
/// Consuming records consumes the underlying lines; interleaving two
/// consumers over one reader is a caller error.
pub struct Reader<L> {
    input: L,
    dialect: Arc<Dialect>,
    rules: Rules,
    field_limit: usize,
    line_num: usize,
    state: ParserState,
    fields: Vec<String>,
    field: String,
    field_len: usize,
    numeric_field: bool,
    exhausted: bool,
}

impl<L: LineSource> Reader<L> {
    pub fn new(input: L, dialect: impl Into<Arc<Dialect>>) -> Result<Self> {
        Self::with_config(input, dialect, ReaderConfig::default())
    }

    /// Reader over a dialect looked up by name.
    pub fn from_name(input: L, name: &str) -> Result<Self> {
        Self::new(input, registry::get_dialect(name)?)
    }

    pub fn with_config(
        input: L,
        dialect: impl Into<Arc<Dialect>>,
        config: ReaderConfig,
    ) -> Result<Self> {
        let dialect = dialect.into();
        dialect.validate()?;
        Ok(Self {
            input,
            rules: Rules::new(&dialect),
            dialect,
            field_limit: config.field_size_limit,
            line_num: 0,
            state: ParserState::StartRecord,
            fields: Vec::new(),
            field: String::new(),
            field_len: 0,
            numeric_field: false,
            exhausted: false,
        })
    }

    /// Physical lines consumed so far.
    pub fn line_num(&self) -> usize {
        self.line_num
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    pub fn next_record(&mut self) -> Option<Result<List<String>>> {
        if self.exhausted {
            return None;
        }
        self.reset();
        loop {
            let line = match self.input.next_line() {
                None => {
                    self.exhausted = true;
                    return self.finish().transpose();
                }
                Some(Err(e)) => return Some(Err(e)),
                Some(Ok(line)) => line,
            };
            self.line_num += 1;
            if let Err(e) = self.process_line(&line) {
                return Some(Err(e));
            }
            if self.state == ParserState::StartRecord {
                break;
            }
        }
        log::trace!(
            "csv record ending at line {} with {} fields",
            self.line_num,
            self.fields.len()
        );
        Some(Ok(List::from_vec(std::mem::take(&mut self.fields))))
    }

    fn reset(&mut self) {
        self.fields.clear();
        self.field.clear();
        self.field_len = 0;
        self.numeric_field = false;
        self.state = ParserState::StartRecord;
    }

    fn process_line(&mut self, line: &str) -> Result<()> {
        // An escape left pending by the previous line escapes its line break.
        match self.state {
            ParserState::EscapedChar => {
                self.add_char('\n')?;
                self.state = ParserState::InField;
            }
            ParserState::EscapeInQuotedField => {
                self.add_char('\n')?;
                self.state = ParserState::InQuotedField;
            }
            _ => {}
        }
        for c in line.chars() {
            if c == '\0' {
                return Err(ErrorKind::NulInLine.into());
            }
            self.process_char(Some(c))?;
        }
        self.process_char(None)
    }

    // End of input with a record possibly still open.
    fn finish(&mut self) -> Result<Option<List<String>>> {
        let pending_escape = matches!(
            self.state,
            ParserState::EscapedChar | ParserState::EscapeInQuotedField
        );
        if !pending_escape && self.field_len == 0 && self.state != ParserState::InQuotedField {
            return Ok(None);
        }
        if self.rules.strict {
            return Err(ErrorKind::UnexpectedEnd.into());
        }
        if pending_escape {
            if let Some(esc) = self.rules.escapechar {
                self.add_char(esc)?;
            }
        }
        self.save_field()?;
        Ok(Some(List::from_vec(std::mem::take(&mut self.fields))))
    }

    /// `None` marks the end of a line.
    fn process_char(&mut self, c: Option<char>) -> Result<()> {
        let r = self.rules;
        match self.state {
            ParserState::StartRecord => match c {
                None => Ok(()),
                Some('\n' | '\r') => {
                    self.state = ParserState::EatCrnl;
                    Ok(())
                }
                _ => {
                    self.state = ParserState::StartField;
                    self.start_field(c, r)
                }
            },
            ParserState::StartField => self.start_field(c, r),
            ParserState::EscapedChar => match c {
                None => Ok(()),
                Some(ch @ ('\n' | '\r')) => {
                    self.add_char(ch)?;
                    self.state = ParserState::AfterEscapedCrnl;
                    Ok(())
                }
                Some(ch) => {
                    self.add_char(ch)?;
                    self.state = ParserState::InField;
                    Ok(())
                }
            },
            ParserState::AfterEscapedCrnl => match c {
                None => Ok(()),
                _ => self.in_field(c, r),
            },
            ParserState::InField => self.in_field(c, r),
            ParserState::InQuotedField => match c {
                None => Ok(()),
                Some(ch) if r.is_escape(ch) => {
                    self.state = ParserState::EscapeInQuotedField;
                    Ok(())
                }
                Some(ch) if r.is_quote(ch) => {
                    self.state = ParserState::QuoteInQuotedField;
                    Ok(())
                }
                Some(ch) => self.add_char(ch),
            },
            ParserState::EscapeInQuotedField => match c {
                None => Ok(()),
                Some(ch) => {
                    self.add_char(ch)?;
                    self.state = ParserState::InQuotedField;
                    Ok(())
                }
            },
            ParserState::QuoteInQuotedField => match c {
                Some(ch) if r.doublequote && r.is_quote(ch) => {
                    self.add_char(ch)?;
                    self.state = ParserState::InQuotedField;
                    Ok(())
                }
                Some(ch) if ch == r.delimiter => {
                    self.save_field()?;
                    self.state = ParserState::StartField;
                    Ok(())
                }
                None => {
                    self.save_field()?;
                    self.state = ParserState::StartRecord;
                    Ok(())
                }
                Some('\n' | '\r') => {
                    self.save_field()?;
                    self.state = ParserState::EatCrnl;
                    Ok(())
                }
                Some(ch) if !r.strict => {
                    self.add_char(ch)?;
                    self.state = ParserState::InField;
                    Ok(())
                }
                Some(_) => Err(ErrorKind::DelimiterExpected {
                    delimiter: r.delimiter,
                    quote: r.quotechar.unwrap_or('"'),
                }
                .into()),
            },
            ParserState::EatCrnl => match c {
                Some('\n' | '\r') => Ok(()),
                None => {
                    self.state = ParserState::StartRecord;
                    Ok(())
                }
                Some(_) => Err(ErrorKind::NewlineInUnquoted.into()),
            },
        }
    }

    fn start_field(&mut self, c: Option<char>, r: Rules) -> Result<()> {
        match c {
            None => {
                self.save_field()?;
                self.state = ParserState::StartRecord;
            }
            Some('\n' | '\r') => {
                self.save_field()?;
                self.state = ParserState::EatCrnl;
            }
            Some(ch) if r.is_quote(ch) => self.state = ParserState::InQuotedField,
            Some(ch) if r.is_escape(ch) => self.state = ParserState::EscapedChar,
            Some(' ') if r.skipinitialspace => {}
            Some(ch) if ch == r.delimiter => self.save_field()?,
            Some(ch) => {
                if r.quoting == QuoteStyle::NonNumeric {
                    self.numeric_field = true;
                }
                self.add_char(ch)?;
                self.state = ParserState::InField;
            }
        }
        Ok(())
    }

    fn in_field(&mut self, c: Option<char>, r: Rules) -> Result<()> {
        match c {
            None => {
                self.save_field()?;
                self.state = ParserState::StartRecord;
            }
            Some('\n' | '\r') => {
                self.save_field()?;
                self.state = ParserState::EatCrnl;
            }
            Some(ch) if r.is_escape(ch) => self.state = ParserState::EscapedChar,
            Some(ch) if ch == r.delimiter => {
                self.save_field()?;
                self.state = ParserState::StartField;
            }
            Some(ch) => self.add_char(ch)?,
        }
        Ok(())
    }

    fn add_char(&mut self, c: char) -> Result<()> {
        if self.field_len >= self.field_limit {
            return Err(ErrorKind::FieldLimit {
                limit: self.field_limit,
            }
            .into());
        }
        self.field.push(c);
        self.field_len += 1;
        Ok(())
    }

    fn save_field(&mut self) -> Result<()> {
        let field = std::mem::take(&mut self.field);
        self.field_len = 0;
        if std::mem::take(&mut self.numeric_field) && !parses_as_number(&field) {
            return Err(ErrorKind::NotNumeric { field }.into());
        }
        self.fields.push(field);
        Ok(())
    }
}

impl<R: BufRead> Reader<BufLines<R>> {
    pub fn from_buf_read(input: R, dialect: impl Into<Arc<Dialect>>) -> Result<Self> {
        Self::new(BufLines::new(input), dialect)
    }
}

impl<L: LineSource> Iterator for Reader<L> {
    type Item = Result<List<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }
}
