use crate::runtime_value::{CallError, RuntimeFunction, RuntimeNumber, RuntimeValue};

/// The capture record of an adder closure.
///
/// Holds the seed captured by [`make_adder`]. It is never mutated after creation, so every adder
/// keeps returning `seed + y` for its whole lifetime and never observes another adder's seed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Adder {
    seed: f64,
}

/// Creates an adder that adds `seed` to whatever it is called with.
pub fn make_adder(seed: f64) -> Adder {
    log::trace!("capturing seed {seed}");
    Adder { seed }
}

impl Adder {
    pub fn seed(self) -> f64 {
        self.seed
    }

    pub fn call(self, y: f64) -> f64 {
        self.seed + y
    }

    /// Moves the capture record into a native closure.
    pub fn into_fn(self) -> impl Fn(f64) -> f64 + Copy {
        move |y| self.call(y)
    }

    /// Turns the adder into a function value of the scripting language.
    ///
    /// A missing argument counts as `undefined`, which turns the sum into `NaN`.
    pub fn into_runtime_function(self) -> RuntimeFunction {
        RuntimeFunction::new("", move |arguments| {
            let y = match arguments.first() {
                None | Some(RuntimeValue::Undefined) => RuntimeNumber::NAN,
                Some(RuntimeValue::Number(number)) => *number,
                Some(other) => return Err(CallError::NotANumber(other.kind())),
            };
            Ok(RuntimeValue::Number(RuntimeNumber::new(self.seed) + y))
        })
    }
}
