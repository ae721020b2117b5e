use crate::runtime_value::{
    RuntimeClass, RuntimeDate, RuntimeError, RuntimeFunction, RuntimeGenerator, RuntimeList,
    RuntimeMap, RuntimeNumber, RuntimeObject, RuntimePromise, RuntimeRegex, RuntimeSet,
    RuntimeString, RuntimeSymbol, RuntimeValue,
};

/// One value of every built-in category, each built the way a script would write it.
#[derive(Clone, Debug)]
pub struct ValueCatalog {
    // primitives
    pub my_bool: bool,
    pub my_number: RuntimeNumber,
    pub my_string: RuntimeString,
    pub my_symbol: RuntimeSymbol,
    pub my_null: RuntimeValue,
    pub my_undefined: RuntimeValue,

    // object types
    pub my_object: RuntimeObject,
    pub my_array: RuntimeList,
    pub my_function: RuntimeFunction,
    pub my_error: RuntimeError,
    pub my_date: RuntimeDate,
    pub my_regex: RuntimeRegex,
    pub my_map: RuntimeMap,
    pub my_set: RuntimeSet,
    pub my_promise: RuntimePromise,
    pub my_generator: RuntimeGenerator,
    pub my_class: RuntimeClass,
}

impl ValueCatalog {
    pub fn new() -> Self {
        let catalog = Self {
            my_bool: true,
            my_number: RuntimeNumber::new(10.0),
            my_string: RuntimeString::new("foo"),
            my_symbol: RuntimeSymbol::new("bar"),
            my_null: RuntimeValue::NULL,
            my_undefined: RuntimeValue::UNDEFINED,

            my_object: RuntimeObject::new(),
            my_array: RuntimeList::new(),
            my_function: RuntimeFunction::noop("my_function"),
            my_error: RuntimeError::new("error"),
            my_date: RuntimeDate::now(),
            my_regex: literal_regex("a"),
            my_map: RuntimeMap::new(),
            my_set: RuntimeSet::new(),
            my_promise: RuntimePromise::resolve(RuntimeValue::UNDEFINED),
            my_generator: RuntimeGenerator::empty("my_generator"),
            my_class: RuntimeClass::new("my_class"),
        };
        log::debug!("constructed value catalog at {}", catalog.my_date);
        catalog
    }

    /// Every binding with its name, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, RuntimeValue)> {
        let entries: [(&'static str, RuntimeValue); 17] = [
            ("my_bool", self.my_bool.into()),
            ("my_number", self.my_number.into()),
            ("my_string", self.my_string.clone().into()),
            ("my_symbol", self.my_symbol.clone().into()),
            ("my_null", self.my_null.clone()),
            ("my_undefined", self.my_undefined.clone()),
            ("my_object", self.my_object.clone().into()),
            ("my_array", self.my_array.clone().into()),
            ("my_function", self.my_function.clone().into()),
            ("my_error", self.my_error.clone().into()),
            ("my_date", self.my_date.into()),
            ("my_regex", self.my_regex.clone().into()),
            ("my_map", self.my_map.clone().into()),
            ("my_set", self.my_set.clone().into()),
            ("my_promise", self.my_promise.clone().into()),
            ("my_generator", self.my_generator.clone().into()),
            ("my_class", self.my_class.clone().into()),
        ];
        entries.into_iter()
    }
}

impl Default for ValueCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Compiles a pattern that is known to be valid at compile time, like a regex literal.
fn literal_regex(pattern: &'static str) -> RuntimeRegex {
    match RuntimeRegex::new(pattern) {
        Ok(regex) => regex,
        Err(error) => unreachable!("regex literal {pattern:?} should be valid: {error}"),
    }
}
