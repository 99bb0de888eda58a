use sk_core::{Error, Result};

/// When the writer wraps a field in quote characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum QuoteStyle {
    All,
    #[default]
    Minimal,
    None,
    NonNumeric,
}

/// Formatting rules shared by a reader or writer for its whole lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: char,
    pub quotechar: Option<char>,
    pub escapechar: Option<char>,
    pub doublequote: bool,
    pub skipinitialspace: bool,
    pub lineterminator: String,
    pub quoting: QuoteStyle,
    pub strict: bool,
}

impl Dialect {
    /// Comma separated, double-quote quoting, `\r\n` terminated.
    pub fn excel() -> Self {
        Self {
            delimiter: ',',
            quotechar: Some('"'),
            escapechar: None,
            doublequote: true,
            skipinitialspace: false,
            lineterminator: "\r\n".to_string(),
            quoting: QuoteStyle::Minimal,
            strict: false,
        }
    }

    pub fn excel_tab() -> Self {
        Self::excel().with_delimiter('\t')
    }

    /// `\n` terminated and every field quoted.
    pub fn unix() -> Self {
        Self::excel()
            .with_lineterminator("\n")
            .with_quoting(QuoteStyle::All)
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_quotechar(mut self, quotechar: Option<char>) -> Self {
        self.quotechar = quotechar;
        self
    }

    pub fn with_escapechar(mut self, escapechar: Option<char>) -> Self {
        self.escapechar = escapechar;
        self
    }

    pub fn with_doublequote(mut self, doublequote: bool) -> Self {
        self.doublequote = doublequote;
        self
    }

    pub fn with_skipinitialspace(mut self, skipinitialspace: bool) -> Self {
        self.skipinitialspace = skipinitialspace;
        self
    }

    pub fn with_lineterminator(mut self, lineterminator: impl Into<String>) -> Self {
        self.lineterminator = lineterminator.into();
        self
    }

    pub fn with_quoting(mut self, quoting: QuoteStyle) -> Self {
        self.quoting = quoting;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.quoting != QuoteStyle::None && self.quotechar.is_none() {
            return Err(Error::invalid_dialect(
                "quotechar must be set if quoting enabled",
            ));
        }
        if self.quotechar == Some(self.delimiter) {
            return Err(Error::invalid_dialect(
                "bad delimiter or quotechar value",
            ));
        }
        if self.escapechar == Some(self.delimiter) {
            return Err(Error::invalid_dialect(
                "bad delimiter or escapechar value",
            ));
        }
        if self.escapechar.is_some() && self.escapechar == self.quotechar {
            return Err(Error::invalid_dialect(
                "bad escapechar or quotechar value",
            ));
        }
        if matches!(self.delimiter, '\r' | '\n') {
            return Err(Error::invalid_dialect("bad delimiter value"));
        }
        if self.lineterminator.is_empty() {
            return Err(Error::invalid_dialect("lineterminator must be set"));
        }
        Ok(())
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::excel()
    }
}
