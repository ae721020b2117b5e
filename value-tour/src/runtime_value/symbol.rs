use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex, PoisonError,
    },
};

use lazy_static::lazy_static;

use super::RuntimeSymbol;

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(0);

lazy_static! {
    /// Symbols shared across the whole process, keyed by their description.
    static ref SYMBOL_REGISTRY: Mutex<HashMap<String, RuntimeSymbol>> = Default::default();
}

impl RuntimeSymbol {
    /// Creates a new symbol that is different from every other symbol, even ones with the same
    /// description.
    pub fn new(description: &str) -> Self {
        Self::with_description(Some(description))
    }

    pub fn anonymous() -> Self {
        Self::with_description(None)
    }

    fn with_description(description: Option<&str>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: description.map(Into::into),
        }
    }

    /// Returns the registered symbol for `key`, creating and registering it on first use.
    pub fn for_key(key: &str) -> Self {
        let mut registry = SYMBOL_REGISTRY
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        registry
            .entry(key.to_owned())
            .or_insert_with(|| Self::new(key))
            .clone()
    }

    /// Returns the key this symbol was registered under, if it came from [`Self::for_key`].
    pub fn key(&self) -> Option<&str> {
        let description = self.description()?;
        let registry = SYMBOL_REGISTRY
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        (registry.get(description) == Some(self)).then_some(description)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl std::hash::Hash for RuntimeSymbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialEq for RuntimeSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RuntimeSymbol {}

impl std::fmt::Display for RuntimeSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_with_same_description_are_distinct() {
        let a = RuntimeSymbol::new("bar");
        let b = RuntimeSymbol::new("bar");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(a.description(), Some("bar"));
    }

    #[test]
    fn registered_symbols_are_shared() {
        let a = RuntimeSymbol::for_key("registered_symbols_are_shared");
        let b = RuntimeSymbol::for_key("registered_symbols_are_shared");
        assert_eq!(a, b);
        assert_eq!(a.key(), Some("registered_symbols_are_shared"));
        assert_eq!(RuntimeSymbol::new("unregistered").key(), None);
    }

    #[test]
    fn display() {
        assert_eq!(RuntimeSymbol::new("bar").to_string(), "Symbol(bar)");
        assert_eq!(RuntimeSymbol::anonymous().to_string(), "Symbol()");
    }
}
