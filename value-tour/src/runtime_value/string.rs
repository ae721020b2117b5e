use std::{cmp::Ordering, sync::Arc};

use super::RuntimeString;

#[derive(Clone, Debug, Default, Eq)]
pub(super) enum Impl {
    #[default]
    Empty,
    NonEmpty(Arc<str>),
}

impl Impl {
    fn as_str(&self) -> &str {
        match self {
            Impl::Empty => "",
            Impl::NonEmpty(string) => string,
        }
    }
}

impl std::hash::Hash for Impl {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl PartialEq for Impl {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for Impl {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Impl {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl RuntimeString {
    pub fn new(string: &str) -> Self {
        let string = if string.is_empty() {
            Impl::Empty
        } else {
            Impl::NonEmpty(string.into())
        };
        Self { string }
    }

    pub fn as_str(&self) -> &str {
        self.string.as_str()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.string, Impl::Empty)
    }

    /// The length in UTF-16 code units, which is what the scripting language reports.
    pub fn length(&self) -> usize {
        self.as_str().encode_utf16().count()
    }
}

impl From<&str> for RuntimeString {
    fn from(string: &str) -> Self {
        Self::new(string)
    }
}

impl From<String> for RuntimeString {
    fn from(string: String) -> Self {
        Self::new(&string)
    }
}

impl std::fmt::Display for RuntimeString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_does_not_allocate() {
        let string = RuntimeString::new("");
        assert!(matches!(string.string, Impl::Empty));
        assert_eq!(string, RuntimeString::default());
    }

    #[test]
    fn length_counts_utf16_code_units() {
        assert_eq!(RuntimeString::new("foo").length(), 3);
        assert_eq!(RuntimeString::new("🐶").length(), 2);
    }
}
