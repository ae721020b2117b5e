use std::{
    future::{ready, IntoFuture, Ready},
    sync::Arc,
};

use super::{RuntimePromise, RuntimeValue};

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum PromiseState {
    Fulfilled(Arc<RuntimeValue>),
    Rejected(Arc<RuntimeValue>),
}

impl RuntimePromise {
    pub fn resolve(value: RuntimeValue) -> Self {
        Self {
            state: PromiseState::Fulfilled(Arc::new(value)),
        }
    }

    pub fn reject(reason: RuntimeValue) -> Self {
        Self {
            state: PromiseState::Rejected(Arc::new(reason)),
        }
    }

    pub fn state(&self) -> &PromiseState {
        &self.state
    }

    /// Returns the value if fulfilled or the reason if rejected.
    pub fn settled(&self) -> Result<&RuntimeValue, &RuntimeValue> {
        match &self.state {
            PromiseState::Fulfilled(value) => Ok(value),
            PromiseState::Rejected(reason) => Err(reason),
        }
    }
}

/// A settled promise is ready on its first poll.
impl IntoFuture for RuntimePromise {
    type Output = Result<RuntimeValue, RuntimeValue>;
    type IntoFuture = Ready<Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        ready(
            self.settled()
                .map(RuntimeValue::clone)
                .map_err(RuntimeValue::clone),
        )
    }
}
