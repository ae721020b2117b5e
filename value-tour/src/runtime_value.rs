mod class;
mod date;
mod error;
mod function;
mod generator;
mod list;
mod map;
mod number;
mod object;
mod promise;
mod regex;
mod set;
mod string;
mod symbol;

use std::sync::Arc;

use derive_more::From;
use paste::paste;
use thiserror::Error;

pub use self::{
    class::ClassDefinition,
    function::NativeFn,
    generator::{GeneratorIter, Producer},
    promise::PromiseState,
};

/// A type that can store a value of any category the scripting language knows about.
///
/// Values are cheap to clone. Everything that doesn't fit in a couple of words is shared behind an
/// [`Arc`] and copied on write.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, From)]
pub enum RuntimeValue {
    #[default]
    #[from(ignore)]
    Undefined,
    #[from(ignore)]
    Null,
    Boolean(bool),
    Number(RuntimeNumber),
    String(RuntimeString),
    Symbol(RuntimeSymbol),
    Object(RuntimeObject),
    List(RuntimeList),
    Function(RuntimeFunction),
    Error(RuntimeError),
    Date(RuntimeDate),
    Regex(RuntimeRegex),
    Map(RuntimeMap),
    Set(RuntimeSet),
    Promise(RuntimePromise),
    Generator(RuntimeGenerator),
    Class(RuntimeClass),
}

macro_rules! impl_runtime_value_accessors {
    ( $( $Variant:ident($ty:ty), )* ) => { paste! { $(
        #[doc = "Returns the inner value if this is a [`RuntimeValue::" $Variant "`]."]
        pub fn [<as_ $Variant:snake>](&self) -> Option<&$ty> {
            match self {
                Self::$Variant(value) => Some(value),
                _ => None,
            }
        }
    )* } };
}

impl RuntimeValue {
    pub const UNDEFINED: Self = Self::Undefined;
    pub const NULL: Self = Self::Null;

    impl_runtime_value_accessors! {
        Boolean(bool),
        Number(RuntimeNumber),
        String(RuntimeString),
        Symbol(RuntimeSymbol),
        Object(RuntimeObject),
        List(RuntimeList),
        Function(RuntimeFunction),
        Error(RuntimeError),
        Date(RuntimeDate),
        Regex(RuntimeRegex),
        Map(RuntimeMap),
        Set(RuntimeSet),
        Promise(RuntimePromise),
        Generator(RuntimeGenerator),
        Class(RuntimeClass),
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Undefined => ValueKind::Undefined,
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Symbol(_) => ValueKind::Symbol,
            Self::Object(_) => ValueKind::Object,
            Self::List(_) => ValueKind::List,
            Self::Function(_) => ValueKind::Function,
            Self::Error(_) => ValueKind::Error,
            Self::Date(_) => ValueKind::Date,
            Self::Regex(_) => ValueKind::Regex,
            Self::Map(_) => ValueKind::Map,
            Self::Set(_) => ValueKind::Set,
            Self::Promise(_) => ValueKind::Promise,
            Self::Generator(_) => ValueKind::Generator,
            Self::Class(_) => ValueKind::Class,
        }
    }

    /// The name the `typeof` operator reports for this value.
    ///
    /// Note that `null` famously reports `"object"`.
    pub fn type_of(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Function(_) | Self::Generator(_) | Self::Class(_) => "function",
            Self::Null
            | Self::Object(_)
            | Self::List(_)
            | Self::Error(_)
            | Self::Date(_)
            | Self::Regex(_)
            | Self::Map(_)
            | Self::Set(_)
            | Self::Promise(_) => "object",
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Boolean(value) => *value,
            Self::Number(number) => !(number.is_zero() || number.is_nan()),
            Self::String(string) => !string.is_empty(),
            _ => true,
        }
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Invokes the value with the given arguments.
    ///
    /// Only plain functions can be called. Classes require construction via
    /// [`RuntimeClass::construct`] and generators are driven by [`RuntimeGenerator::iter`].
    pub fn call(&self, arguments: &[RuntimeValue]) -> Result<RuntimeValue, CallError> {
        match self {
            Self::Function(function) => function.call(arguments),
            Self::Class(class) => Err(CallError::ClassConstructorWithoutNew(
                class.name().to_owned(),
            )),
            other => Err(CallError::NotCallable(other.kind())),
        }
    }
}

impl std::fmt::Display for RuntimeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Number(number) => write!(f, "{number}"),
            Self::String(string) => f.write_str(string.as_str()),
            Self::Symbol(symbol) => write!(f, "{symbol}"),
            Self::Object(_) => f.write_str("[object Object]"),
            Self::List(list) => write!(f, "{list}"),
            Self::Function(function) => {
                write!(f, "function {}() {{ [native code] }}", function.name())
            }
            Self::Error(error) => write!(f, "{error}"),
            Self::Date(date) => write!(f, "{date}"),
            Self::Regex(regex) => write!(f, "{regex}"),
            Self::Map(_) => f.write_str("[object Map]"),
            Self::Set(_) => f.write_str("[object Set]"),
            Self::Promise(_) => f.write_str("[object Promise]"),
            Self::Generator(generator) => {
                write!(f, "function* {}() {{ [native code] }}", generator.name())
            }
            Self::Class(class) => write!(f, "class {} {{ }}", class.name()),
        }
    }
}

impl From<f64> for RuntimeValue {
    fn from(value: f64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for RuntimeValue {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValueKind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Symbol,
    Object,
    List,
    Function,
    Error,
    Date,
    Regex,
    Map,
    Set,
    Promise,
    Generator,
    Class,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Symbol => "symbol",
            Self::Object => "object",
            Self::List => "array",
            Self::Function => "function",
            Self::Error => "error",
            Self::Date => "date",
            Self::Regex => "regular expression",
            Self::Map => "map",
            Self::Set => "set",
            Self::Promise => "promise",
            Self::Generator => "generator function",
            Self::Class => "class",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum CallError {
    #[error("{0} is not a function")]
    NotCallable(ValueKind),
    #[error("expected a number, found {0}")]
    NotANumber(ValueKind),
    #[error("invalid regular expression: {0}")]
    InvalidPattern(#[from] ::regex::Error),
    #[error("class constructor {0} cannot be invoked without 'new'")]
    ClassConstructorWithoutNew(String),
}

/// A double precision float that compares the way map keys do.
///
/// `NaN` is equal to itself and `0` is equal to `-0`.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RuntimeNumber {
    value: ordered_float::OrderedFloat<f64>,
}

#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RuntimeString {
    string: string::Impl,
}

/// A globally unique token with an optional description.
#[derive(Clone, Debug)]
pub struct RuntimeSymbol {
    id: u64,
    description: Option<Arc<str>>,
}

/// A record of string keyed properties in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeObject {
    object: object::Impl,
}

#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct RuntimeList {
    list: list::Impl,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct RuntimeFunction {
    name: Arc<str>,
    function: function::Impl,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct RuntimeError {
    name: Arc<str>,
    message: Arc<str>,
}

/// A point in time with millisecond precision, in UTC.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RuntimeDate {
    time: chrono::DateTime<chrono::Utc>,
}

#[derive(Clone, Debug)]
pub struct RuntimeRegex {
    regex: Arc<::regex::Regex>,
}

/// An associative container that accepts any value as key and remembers insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeMap {
    map: map::Impl,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeSet {
    set: set::Impl,
}

/// A deferred result that is already settled.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct RuntimePromise {
    state: PromiseState,
}

/// A function that produces a lazy sequence of values every time it is driven.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct RuntimeGenerator {
    name: Arc<str>,
    producer: generator::Impl,
}

/// A template for constructing objects.
///
/// Compares by identity, two separately defined classes are never equal.
#[derive(Clone, Debug)]
pub struct RuntimeClass {
    definition: Arc<ClassDefinition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_category() -> Vec<RuntimeValue> {
        vec![
            RuntimeValue::Undefined,
            RuntimeValue::Null,
            true.into(),
            10.0.into(),
            "foo".into(),
            RuntimeSymbol::new("bar").into(),
            RuntimeObject::new().into(),
            RuntimeList::new().into(),
            RuntimeFunction::noop("f").into(),
            RuntimeError::new("error").into(),
            RuntimeDate::from_millis(0).unwrap().into(),
            RuntimeRegex::new("a").unwrap().into(),
            RuntimeMap::new().into(),
            RuntimeSet::new().into(),
            RuntimePromise::resolve(RuntimeValue::Undefined).into(),
            RuntimeGenerator::empty("g").into(),
            RuntimeClass::new("C").into(),
        ]
    }

    #[test]
    fn every_category_has_a_distinct_kind() {
        let values = every_category();
        let mut kinds = values.iter().map(RuntimeValue::kind).collect::<Vec<_>>();
        kinds.sort();
        kinds.dedup();
        assert_eq!(kinds.len(), values.len());
    }

    #[test]
    fn type_of_matches_script_semantics() {
        let names = every_category()
            .iter()
            .map(RuntimeValue::type_of)
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "undefined",
                "object",
                "boolean",
                "number",
                "string",
                "symbol",
                "object",
                "object",
                "function",
                "object",
                "object",
                "object",
                "object",
                "object",
                "object",
                "function",
                "function",
            ]
        );
    }

    #[test]
    fn truthiness() {
        assert!(!RuntimeValue::Undefined.is_truthy());
        assert!(!RuntimeValue::Null.is_truthy());
        assert!(!RuntimeValue::from(0.0).is_truthy());
        assert!(!RuntimeValue::from(-0.0).is_truthy());
        assert!(!RuntimeValue::from(f64::NAN).is_truthy());
        assert!(!RuntimeValue::from("").is_truthy());
        assert!(RuntimeValue::from("0").is_truthy());
        assert!(RuntimeValue::from(RuntimeList::new()).is_truthy());
        assert!(RuntimeValue::from(RuntimeObject::new()).is_truthy());
    }

    #[test]
    fn display_follows_string_conversion() {
        let displayed = every_category()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        assert_eq!(displayed[0], "undefined");
        assert_eq!(displayed[1], "null");
        assert_eq!(displayed[2], "true");
        assert_eq!(displayed[3], "10");
        assert_eq!(displayed[4], "foo");
        assert_eq!(displayed[5], "Symbol(bar)");
        assert_eq!(displayed[6], "[object Object]");
        assert_eq!(displayed[7], "");
        assert_eq!(displayed[9], "Error: error");
        assert_eq!(displayed[10], "1970-01-01T00:00:00.000Z");
        assert_eq!(displayed[11], "/a/");
        assert_eq!(displayed[12], "[object Map]");
        assert_eq!(displayed[13], "[object Set]");
        assert_eq!(displayed[14], "[object Promise]");
        assert_eq!(displayed[16], "class C { }");
    }

    #[test]
    fn accessors_only_match_their_variant() {
        let value = RuntimeValue::from(true);
        assert_eq!(value.as_boolean(), Some(&true));
        assert!(value.as_number().is_none());

        let value = RuntimeValue::from(RuntimeMap::new());
        assert_eq!(value.as_map().map(RuntimeMap::size), Some(0));
        assert!(value.as_set().is_none());
    }

    #[test]
    fn only_functions_are_callable() {
        let function = RuntimeValue::from(RuntimeFunction::noop("f"));
        assert_eq!(function.call(&[]).unwrap(), RuntimeValue::Undefined);

        let Err(CallError::NotCallable(ValueKind::Number)) = RuntimeValue::from(1.0).call(&[])
        else {
            panic!("numbers should not be callable")
        };

        let Err(CallError::ClassConstructorWithoutNew(name)) =
            RuntimeValue::from(RuntimeClass::new("C")).call(&[])
        else {
            panic!("classes should require construction")
        };
        assert_eq!(name, "C");
    }
}
