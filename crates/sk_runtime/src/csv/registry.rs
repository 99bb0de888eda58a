//! Named dialects.
//!
//! A process-wide registry maps names to shared `Dialect` values. It starts
//! out holding whatever `StdDialectProvider` installs; generated code may add
//! or remove entries at any time.

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use ahash::RandomState;
use indexmap::IndexMap;
use sk_core::{ErrorKind, Result};

use super::dialect::Dialect;
use crate::list::List;

pub const DEFAULT_DIALECT: &str = "excel";

pub struct DialectRegistry {
    entries: IndexMap<String, Arc<Dialect>, RandomState>,
}

impl DialectRegistry {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::with_hasher(RandomState::new()),
        }
    }

    pub fn register(&mut self, name: &str, dialect: Dialect) -> Result<()> {
        dialect.validate()?;
        self.entries.insert(name.to_string(), Arc::new(dialect));
        Ok(())
    }

    pub fn unregister(&mut self, name: &str) -> Result<()> {
        self.entries
            .shift_remove(name)
            .map(|_| ())
            .ok_or_else(|| unknown(name))
    }

    pub fn get(&self, name: &str) -> Result<Arc<Dialect>> {
        self.entries.get(name).cloned().ok_or_else(|| unknown(name))
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn unknown(name: &str) -> sk_core::Error {
    ErrorKind::UnknownDialect {
        name: name.to_string(),
    }
    .into()
}

pub trait DialectProvider {
    fn install(&self, registry: &mut DialectRegistry) -> Result<()>;
}

pub struct StdDialectProvider;

impl DialectProvider for StdDialectProvider {
    fn install(&self, registry: &mut DialectRegistry) -> Result<()> {
        registry.register(DEFAULT_DIALECT, Dialect::excel())?;
        registry.register("excel-tab", Dialect::excel_tab())?;
        registry.register("unix", Dialect::unix())?;
        Ok(())
    }
}

fn global() -> &'static RwLock<DialectRegistry> {
    static REGISTRY: OnceLock<RwLock<DialectRegistry>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut reg = DialectRegistry::new();
        if let Err(e) = StdDialectProvider.install(&mut reg) {
            log::warn!("built-in dialects failed to install: {e}");
        }
        RwLock::new(reg)
    })
}

pub fn register_dialect(name: &str, dialect: Dialect) -> Result<()> {
    global()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(name, dialect)?;
    log::debug!("registered csv dialect '{name}'");
    Ok(())
}

pub fn unregister_dialect(name: &str) -> Result<()> {
    global()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .unregister(name)?;
    log::debug!("unregistered csv dialect '{name}'");
    Ok(())
}

pub fn get_dialect(name: &str) -> Result<Arc<Dialect>> {
    global()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
}

pub fn list_dialects() -> List<String> {
    global()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .names()
        .into()
}
