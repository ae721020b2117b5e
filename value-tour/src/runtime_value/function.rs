use std::sync::Arc;

use super::{CallError, RuntimeFunction, RuntimeValue};

/// The body of a function implemented in Rust.
pub type NativeFn = dyn Fn(&[RuntimeValue]) -> Result<RuntimeValue, CallError> + Send + Sync;

#[derive(Clone)]
pub(super) struct Impl(Arc<NativeFn>);

impl std::fmt::Debug for Impl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:p}", self.0)
    }
}

impl std::hash::Hash for Impl {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // strip metadata to match PartialEq
        (Arc::as_ptr(&self.0) as *const ()).hash(state);
    }
}

impl PartialEq for Impl {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Impl {}

impl RuntimeFunction {
    pub fn new(
        name: &str,
        function: impl Fn(&[RuntimeValue]) -> Result<RuntimeValue, CallError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            function: Impl(Arc::new(function)),
        }
    }

    /// A function that ignores its arguments and returns `undefined`.
    pub fn noop(name: &str) -> Self {
        Self::new(name, |_| Ok(RuntimeValue::Undefined))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, arguments: &[RuntimeValue]) -> Result<RuntimeValue, CallError> {
        log::trace!("calling {:?} with {} argument(s)", self.name, arguments.len());
        (self.function.0)(arguments)
    }
}
