use std::sync::Arc;

use super::{CallError, RuntimeRegex};

impl RuntimeRegex {
    pub fn new(pattern: &str) -> Result<Self, CallError> {
        Ok(Self {
            regex: Arc::new(::regex::Regex::new(pattern)?),
        })
    }

    /// The pattern this regex was compiled from.
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

impl std::hash::Hash for RuntimeRegex {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.source().hash(state);
    }
}

impl PartialEq for RuntimeRegex {
    fn eq(&self, other: &Self) -> bool {
        self.source() == other.source()
    }
}

impl Eq for RuntimeRegex {}

impl std::fmt::Display for RuntimeRegex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}/", self.source())
    }
}
