use std::sync::Arc;

use indexmap::IndexMap;

use super::{RuntimeObject, RuntimeValue};

type Properties = IndexMap<Arc<str>, RuntimeValue>;

#[derive(Clone, Debug, Default, Eq)]
pub(super) enum Impl {
    #[default]
    Empty,
    NonEmpty(Arc<Properties>),
}

impl Impl {
    fn as_properties(&self) -> Option<&Properties> {
        match self {
            Impl::Empty => None,
            Impl::NonEmpty(properties) => Some(properties),
        }
    }

    fn to_mut(&mut self) -> &mut Properties {
        if let Impl::Empty = self {
            *self = Impl::NonEmpty(Default::default());
        }
        match self {
            Impl::NonEmpty(properties) => Arc::make_mut(properties),
            Impl::Empty => unreachable!("object should have been allocated"),
        }
    }
}

impl PartialEq for Impl {
    fn eq(&self, other: &Self) -> bool {
        match (self.as_properties(), other.as_properties()) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            (lhs, rhs) => lhs.map_or(0, IndexMap::len) == rhs.map_or(0, IndexMap::len),
        }
    }
}

impl RuntimeObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.object.as_properties().map_or(0, IndexMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, key: &str) -> Option<&RuntimeValue> {
        self.object.as_properties()?.get(key)
    }

    /// Sets a property, returning its previous value.
    ///
    /// Existing properties keep their position, new ones are appended.
    pub fn insert(&mut self, key: &str, value: RuntimeValue) -> Option<RuntimeValue> {
        self.object.to_mut().insert(key.into(), value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.object
            .as_properties()
            .into_iter()
            .flat_map(|properties| properties.keys().map(|key| &**key))
    }
}

/// Only hashes the property count, since equal objects may list their properties in a different
/// order.
impl std::hash::Hash for RuntimeObject {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.len().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_object_has_no_properties() {
        let object = RuntimeObject::new();
        assert!(object.is_empty());
        assert_eq!(object.keys().count(), 0);
        assert!(object.get("missing").is_none());
    }

    #[test]
    fn insert_keeps_property_order() {
        let mut object = RuntimeObject::new();
        assert_eq!(object.insert("b", 1.0.into()), None);
        assert_eq!(object.insert("a", 2.0.into()), None);
        assert_eq!(object.insert("b", 3.0.into()), Some(1.0.into()));

        assert_eq!(object.keys().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(object.get("b"), Some(&3.0.into()));
    }

    #[test]
    fn clones_are_independent() {
        let mut original = RuntimeObject::new();
        original.insert("x", 1.0.into());
        let mut copy = original.clone();
        copy.insert("y", 2.0.into());

        assert_eq!(original.len(), 1);
        assert_eq!(copy.len(), 2);
        assert_ne!(original, copy);
    }
}
