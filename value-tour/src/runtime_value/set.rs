use std::sync::Arc;

use indexmap::IndexSet;

use super::{RuntimeSet, RuntimeValue};

#[derive(Clone, Debug, Default, Eq)]
pub(super) enum Impl {
    #[default]
    Empty,
    NonEmpty(Arc<IndexSet<RuntimeValue>>),
}

impl Impl {
    fn as_set(&self) -> Option<&IndexSet<RuntimeValue>> {
        match self {
            Impl::Empty => None,
            Impl::NonEmpty(values) => Some(values),
        }
    }

    fn to_mut(&mut self) -> &mut IndexSet<RuntimeValue> {
        if let Impl::Empty = self {
            *self = Impl::NonEmpty(Default::default());
        }
        match self {
            Impl::NonEmpty(values) => Arc::make_mut(values),
            Impl::Empty => unreachable!("set should have been allocated"),
        }
    }
}

impl PartialEq for Impl {
    fn eq(&self, other: &Self) -> bool {
        match (self.as_set(), other.as_set()) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            (lhs, rhs) => lhs.map_or(0, IndexSet::len) == rhs.map_or(0, IndexSet::len),
        }
    }
}

impl RuntimeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.set.as_set().map_or(0, IndexSet::len)
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn has(&self, value: &RuntimeValue) -> bool {
        self.set
            .as_set()
            .is_some_and(|values| values.contains(value))
    }

    /// Adds `value` unless an equal value is already present.
    pub fn add(&mut self, value: RuntimeValue) {
        if !self.has(&value) {
            self.set.to_mut().insert(value);
        }
    }

    pub fn delete(&mut self, value: &RuntimeValue) -> bool {
        if !self.has(value) {
            return false;
        }
        self.set.to_mut().shift_remove(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuntimeValue> {
        self.set.as_set().into_iter().flatten()
    }
}

impl FromIterator<RuntimeValue> for RuntimeSet {
    fn from_iter<T: IntoIterator<Item = RuntimeValue>>(iter: T) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.add(value);
        }
        set
    }
}

/// Only hashes the size, since equal sets may list their values in a different order.
impl std::hash::Hash for RuntimeSet {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.size().hash(state);
    }
}
