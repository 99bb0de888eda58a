//! Records keyed by field name.

use std::hash::BuildHasher;
use std::io::Write;

use hashbrown::HashSet;
use indexmap::IndexMap;
use sk_core::{ErrorKind, Result};

use super::field::CsvField;
use super::reader::{LineSource, Reader};
use super::writer::Writer;

/// One record of a `DictReader`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DictRow {
    /// Values by field name, in field-name order.
    pub fields: IndexMap<String, String>,
    /// Values beyond the last field name.
    pub rest: Vec<String>,
}

impl DictRow {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

pub struct DictReader<L> {
    reader: Reader<L>,
    fieldnames: Option<Vec<String>>,
    restval: String,
}

impl<L: LineSource> DictReader<L> {
    /// With `fieldnames` unset, the first record names the fields.
    pub fn new(reader: Reader<L>, fieldnames: Option<Vec<String>>) -> Self {
        Self {
            reader,
            fieldnames,
            restval: String::new(),
        }
    }

    /// Value given to fields a short record does not reach.
    pub fn with_restval(mut self, restval: impl Into<String>) -> Self {
        self.restval = restval.into();
        self
    }

    pub fn line_num(&self) -> usize {
        self.reader.line_num()
    }

    pub fn set_fieldnames(&mut self, fieldnames: Vec<String>) {
        self.fieldnames = Some(fieldnames);
    }

    /// Field names, consuming the header record if none were given.
    pub fn fieldnames(&mut self) -> Result<&[String]> {
        if self.fieldnames.is_none() {
            let header = match self.reader.next_record() {
                Some(record) => record?.into_vec(),
                None => Vec::new(),
            };
            self.fieldnames = Some(header);
        }
        Ok(self.fieldnames.as_deref().unwrap_or_default())
    }

    pub fn next_row(&mut self) -> Option<Result<DictRow>> {
        if let Err(e) = self.fieldnames() {
            return Some(Err(e));
        }
        let record = loop {
            match self.reader.next_record()? {
                Ok(record) if record.is_empty() => continue,
                Ok(record) => break record,
                Err(e) => return Some(Err(e)),
            }
        };
        let names = self.fieldnames.as_deref().unwrap_or_default();
        let mut values = record.into_iter();
        let mut fields = IndexMap::with_capacity(names.len());
        for name in names {
            let value = values.next().unwrap_or_else(|| self.restval.clone());
            fields.insert(name.clone(), value);
        }
        Some(Ok(DictRow {
            fields,
            rest: values.collect(),
        }))
    }
}

impl<L: LineSource> Iterator for DictReader<L> {
    type Item = Result<DictRow>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_row()
    }
}

/// What `DictWriter` does with keys missing from its field names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExtrasAction {
    #[default]
    Raise,
    Ignore,
}

pub struct DictWriter<W> {
    writer: Writer<W>,
    fieldnames: Vec<String>,
    known: HashSet<String>,
    restval: String,
    extras: ExtrasAction,
}

impl<W: Write> DictWriter<W> {
    pub fn new(writer: Writer<W>, fieldnames: Vec<String>) -> Self {
        let known = fieldnames.iter().cloned().collect();
        Self {
            writer,
            fieldnames,
            known,
            restval: String::new(),
            extras: ExtrasAction::default(),
        }
    }

    /// Value written for field names a row has no key for.
    pub fn with_restval(mut self, restval: impl Into<String>) -> Self {
        self.restval = restval.into();
        self
    }

    pub fn with_extras(mut self, extras: ExtrasAction) -> Self {
        self.extras = extras;
        self
    }

    pub fn fieldnames(&self) -> &[String] {
        &self.fieldnames
    }

    pub fn writer(&self) -> &Writer<W> {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    pub fn writeheader(&mut self) -> Result<()> {
        self.writer.writerow(&self.fieldnames)
    }

    pub fn writerow<V, S>(&mut self, row: &IndexMap<String, V, S>) -> Result<()>
    where
        V: CsvField,
        S: BuildHasher,
    {
        if self.extras == ExtrasAction::Raise {
            let extra: Vec<String> = row
                .keys()
                .filter(|k| !self.known.contains(k.as_str()))
                .cloned()
                .collect();
            if !extra.is_empty() {
                return Err(ErrorKind::ExtraFields { fields: extra }.into());
            }
        }
        let record: Vec<&dyn CsvField> = self
            .fieldnames
            .iter()
            .map(|name| match row.get(name) {
                Some(v) => v as &dyn CsvField,
                None => &self.restval as &dyn CsvField,
            })
            .collect();
        self.writer.writerow(&record)
    }

    pub fn writerows<'r, V, S>(
        &mut self,
        rows: impl IntoIterator<Item = &'r IndexMap<String, V, S>>,
    ) -> Result<()>
    where
        V: CsvField + 'r,
        S: BuildHasher + 'r,
    {
        for row in rows {
            self.writerow(row)?;
        }
        Ok(())
    }
}
