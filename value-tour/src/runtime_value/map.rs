use std::sync::Arc;

use indexmap::IndexMap;

use super::{RuntimeMap, RuntimeValue};

type Entries = IndexMap<RuntimeValue, RuntimeValue>;

#[derive(Clone, Debug, Default, Eq)]
pub(super) enum Impl {
    #[default]
    Empty,
    NonEmpty(Arc<Entries>),
}

impl Impl {
    fn as_entries(&self) -> Option<&Entries> {
        match self {
            Impl::Empty => None,
            Impl::NonEmpty(entries) => Some(entries),
        }
    }

    fn to_mut(&mut self) -> &mut Entries {
        if let Impl::Empty = self {
            *self = Impl::NonEmpty(Default::default());
        }
        match self {
            Impl::NonEmpty(entries) => Arc::make_mut(entries),
            Impl::Empty => unreachable!("map should have been allocated"),
        }
    }
}

impl PartialEq for Impl {
    fn eq(&self, other: &Self) -> bool {
        match (self.as_entries(), other.as_entries()) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            (lhs, rhs) => lhs.map_or(0, IndexMap::len) == rhs.map_or(0, IndexMap::len),
        }
    }
}

impl RuntimeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.map.as_entries().map_or(0, IndexMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn get(&self, key: &RuntimeValue) -> Option<&RuntimeValue> {
        self.map.as_entries()?.get(key)
    }

    pub fn has(&self, key: &RuntimeValue) -> bool {
        self.map
            .as_entries()
            .is_some_and(|entries| entries.contains_key(key))
    }

    /// Associates `value` with `key`.
    ///
    /// Overwriting an existing key keeps its original insertion position.
    pub fn set(&mut self, key: RuntimeValue, value: RuntimeValue) {
        self.map.to_mut().insert(key, value);
    }

    /// Removes `key`, returning whether it was present.
    pub fn delete(&mut self, key: &RuntimeValue) -> bool {
        if !self.has(key) {
            return false;
        }
        self.map.to_mut().shift_remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.map = Impl::Empty;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RuntimeValue, &RuntimeValue)> {
        self.map.as_entries().into_iter().flatten()
    }
}

impl FromIterator<(RuntimeValue, RuntimeValue)> for RuntimeMap {
    fn from_iter<T: IntoIterator<Item = (RuntimeValue, RuntimeValue)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}

/// Only hashes the size, since equal maps may list their entries in a different order.
impl std::hash::Hash for RuntimeMap {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.size().hash(state);
    }
}
