use std::sync::Arc;

use super::{RuntimeGenerator, RuntimeValue};

pub type GeneratorIter = Box<dyn Iterator<Item = RuntimeValue>>;

/// Starts a fresh run of a generator.
pub type Producer = dyn Fn() -> GeneratorIter + Send + Sync;

#[derive(Clone)]
pub(super) struct Impl(Arc<Producer>);

impl std::fmt::Debug for Impl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:p}", self.0)
    }
}

impl std::hash::Hash for Impl {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.0) as *const ()).hash(state);
    }
}

impl PartialEq for Impl {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Impl {}

impl RuntimeGenerator {
    pub fn new(name: &str, producer: impl Fn() -> GeneratorIter + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            producer: Impl(Arc::new(producer)),
        }
    }

    /// A generator that finishes without yielding anything.
    pub fn empty(name: &str) -> Self {
        Self::new(name, || Box::new(std::iter::empty::<RuntimeValue>()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Starts a new run. Values are only produced as the iterator is advanced.
    pub fn iter(&self) -> GeneratorIter {
        (self.producer.0)()
    }
}
