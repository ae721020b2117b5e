use std::sync::Arc;

use super::{RuntimeList, RuntimeValue};

#[derive(Clone, Debug, Default, Eq)]
pub(super) enum Impl {
    #[default]
    Empty,
    NonEmpty(Arc<Vec<RuntimeValue>>),
}

impl Impl {
    fn as_slice(&self) -> &[RuntimeValue] {
        match self {
            Impl::Empty => &[],
            Impl::NonEmpty(values) => values.as_slice(),
        }
    }

    fn to_mut(&mut self) -> &mut Vec<RuntimeValue> {
        if let Impl::Empty = self {
            *self = Impl::NonEmpty(Default::default());
        }
        match self {
            Impl::NonEmpty(values) => Arc::make_mut(values),
            Impl::Empty => unreachable!("list should have been allocated"),
        }
    }
}

impl std::hash::Hash for Impl {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl PartialEq for Impl {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl RuntimeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.list.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.as_slice().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RuntimeValue> {
        self.list.as_slice().get(index)
    }

    /// Appends a value, copying the underlying storage first if it is shared.
    pub fn push(&mut self, value: RuntimeValue) {
        self.list.to_mut().push(value);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuntimeValue> {
        self.list.as_slice().iter()
    }
}

impl FromIterator<RuntimeValue> for RuntimeList {
    fn from_iter<T: IntoIterator<Item = RuntimeValue>>(iter: T) -> Self {
        let values = iter.into_iter().collect::<Vec<_>>();
        let list = if values.is_empty() {
            Impl::Empty
        } else {
            Impl::NonEmpty(Arc::new(values))
        };
        Self { list }
    }
}

impl<'a> IntoIterator for &'a RuntimeList {
    type Item = &'a RuntimeValue;
    type IntoIter = std::slice::Iter<'a, RuntimeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Joins the elements with commas, showing `null` and `undefined` as empty.
impl std::fmt::Display for RuntimeList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            if !value.is_nullish() {
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_list_is_empty() {
        let list = RuntimeList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert!(list.get(0).is_none());
    }

    #[test]
    fn push_copies_shared_storage() {
        let mut original = RuntimeList::new();
        original.push(1.0.into());

        let mut copy = original.clone();
        copy.push(2.0.into());

        assert_eq!(original.len(), 1);
        assert_eq!(copy.len(), 2);
        assert_eq!(copy.get(1), Some(&RuntimeValue::from(2.0)));
    }

    #[test]
    fn display_joins_with_commas() {
        let list = [
            RuntimeValue::from(1.0),
            RuntimeValue::Null,
            RuntimeValue::from("a"),
        ]
        .into_iter()
        .collect::<RuntimeList>();
        assert_eq!(list.to_string(), "1,,a");
    }
}
