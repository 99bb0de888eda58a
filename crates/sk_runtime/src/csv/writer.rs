//! CSV record writer.

use std::io::Write;
use std::sync::Arc;

use sk_core::{Error, ErrorKind, Result};

use super::dialect::{Dialect, QuoteStyle};
use super::field::CsvField;
use super::registry;

pub struct Writer<W> {
    output: W,
    dialect: Arc<Dialect>,
    num_fields: Option<usize>,
    ragged_rows: usize,
    rec: String,
    scratch: String,
}

impl<W: Write> Writer<W> {
    pub fn new(output: W, dialect: impl Into<Arc<Dialect>>) -> Result<Self> {
        let dialect = dialect.into();
        dialect.validate()?;
        Ok(Self {
            output,
            dialect,
            num_fields: None,
            ragged_rows: 0,
            rec: String::new(),
            scratch: String::new(),
        })
    }

    pub fn from_name(output: W, name: &str) -> Result<Self> {
        Self::new(output, registry::get_dialect(name)?)
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Field count of the first row written.
    pub fn num_fields(&self) -> Option<usize> {
        self.num_fields
    }

    /// Rows whose field count differed from the first row's.
    pub fn ragged_rows(&self) -> usize {
        self.ragged_rows
    }

    pub fn get_ref(&self) -> &W {
        &self.output
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    /// Render one record into a line, without writing it.
    pub fn format_row<F: CsvField>(&mut self, record: &[F]) -> Result<&str> {
        self.rec.clear();
        let quote_empty = record.len() == 1;
        for (i, field) in record.iter().enumerate() {
            if i > 0 {
                self.rec.push(self.dialect.delimiter);
            }
            self.scratch.clear();
            field.append_to(&mut self.scratch);
            let quoted = match self.dialect.quoting {
                QuoteStyle::All => true,
                QuoteStyle::NonNumeric => !field.is_numeric(),
                QuoteStyle::Minimal | QuoteStyle::None => false,
            };
            append_field(&self.dialect, &mut self.rec, &self.scratch, quoted, quote_empty)?;
        }
        self.rec.push_str(&self.dialect.lineterminator);
        Ok(self.rec.as_str())
    }

    pub fn writerow<F: CsvField>(&mut self, record: &[F]) -> Result<()> {
        self.format_row(record)?;
        match self.num_fields {
            None => self.num_fields = Some(record.len()),
            Some(n) if n != record.len() => {
                self.ragged_rows += 1;
                log::debug!(
                    "csv row with {} fields after a first row of {}",
                    record.len(),
                    n
                );
            }
            Some(_) => {}
        }
        self.output
            .write_all(self.rec.as_bytes())
            .map_err(|e| Error::io("csv output", e))
    }

    pub fn writerows<R, F>(&mut self, records: impl IntoIterator<Item = R>) -> Result<()>
    where
        R: AsRef<[F]>,
        F: CsvField,
    {
        for record in records {
            self.writerow(record.as_ref())?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.output
            .flush()
            .map_err(|e| Error::io("csv output", e))
    }
}

// Line breaks always need care: the reader ends a record on either one.
fn needs_care(d: &Dialect, c: char) -> bool {
    matches!(c, '\r' | '\n')
        || c == d.delimiter
        || d.escapechar == Some(c)
        || d.quotechar == Some(c)
        || d.lineterminator.contains(c)
}

fn append_field(
    d: &Dialect,
    out: &mut String,
    field: &str,
    mut quoted: bool,
    quote_empty: bool,
) -> Result<()> {
    let mut body = String::with_capacity(field.len() + 2);
    for c in field.chars() {
        if needs_care(d, c) {
            let mut want_escape = false;
            if d.quoting == QuoteStyle::None {
                want_escape = true;
            } else {
                if d.quotechar == Some(c) {
                    if d.doublequote {
                        body.push(c);
                    } else {
                        want_escape = true;
                    }
                } else if d.escapechar == Some(c) {
                    want_escape = true;
                }
                quoted = true;
            }
            if want_escape {
                let esc = d.escapechar.ok_or(ErrorKind::EscapeRequired)?;
                body.push(esc);
            }
        }
        body.push(c);
    }
    if field.is_empty() && quote_empty {
        if d.quoting == QuoteStyle::None {
            return Err(ErrorKind::EmptyFieldUnquoted.into());
        }
        quoted = true;
    }
    match d.quotechar {
        Some(q) if quoted => {
            out.push(q);
            out.push_str(&body);
            out.push(q);
        }
        _ => out.push_str(&body),
    }
    Ok(())
}
