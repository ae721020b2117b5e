use std::sync::Arc;

use super::{RuntimeClass, RuntimeObject, RuntimeValue};

/// The shared definition behind a [`RuntimeClass`].
#[derive(Debug)]
pub struct ClassDefinition {
    name: Arc<str>,
    /// Instance fields with their initial values, in declaration order.
    fields: Vec<(Arc<str>, RuntimeValue)>,
}

impl ClassDefinition {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: &str, initial_value: RuntimeValue) -> Self {
        self.fields.push((name.into(), initial_value));
        self
    }
}

impl RuntimeClass {
    /// Defines a class without any instance fields.
    pub fn new(name: &str) -> Self {
        ClassDefinition::new(name).into()
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Creates a new instance with every field set to its initial value.
    pub fn construct(&self) -> RuntimeObject {
        log::trace!("constructing instance of class {:?}", self.name());
        let mut instance = RuntimeObject::new();
        for (name, initial_value) in &self.definition.fields {
            instance.insert(name, initial_value.clone());
        }
        instance
    }
}

impl From<ClassDefinition> for RuntimeClass {
    fn from(definition: ClassDefinition) -> Self {
        Self {
            definition: Arc::new(definition),
        }
    }
}

impl std::hash::Hash for RuntimeClass {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.definition).hash(state);
    }
}

impl PartialEq for RuntimeClass {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.definition, &other.definition)
    }
}

impl Eq for RuntimeClass {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_compare_by_identity() {
        let a = RuntimeClass::new("C");
        let b = RuntimeClass::new("C");
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn empty_class_constructs_empty_objects() {
        let class = RuntimeClass::new("");
        assert_eq!(class.name(), "");
        assert!(class.construct().is_empty());
    }

    #[test]
    fn construct_initializes_fields() {
        let point = RuntimeClass::from(
            ClassDefinition::new("Point")
                .field("x", 0.0.into())
                .field("y", 0.0.into()),
        );

        let mut first = point.construct();
        first.insert("x", 3.0.into());
        let second = point.construct();

        assert_eq!(first.get("x"), Some(&3.0.into()));
        assert_eq!(second.get("x"), Some(&0.0.into()));
        assert_eq!(second.keys().collect::<Vec<_>>(), ["x", "y"]);
    }
}
