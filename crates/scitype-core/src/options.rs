//! Configuration for building a [`Classifier`](crate::Classifier).

use serde::{Deserialize, Serialize};

/// Options controlling classification.
///
/// Deserializes from any serde format; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierOptions {
    /// Convention activated when the classifier is built.
    pub convention: Option<String>,

    /// Consult the fast-path registry before scanning container elements.
    ///
    /// Turning this off never changes an answer, only the cost of reaching
    /// it.
    pub fast_path: bool,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            convention: None,
            fast_path: true,
        }
    }
}

impl ClassifierOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_convention(mut self, name: impl Into<String>) -> Self {
        self.convention = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_fast_path(mut self, enable: bool) -> Self {
        self.fast_path = enable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let options: ClassifierOptions =
            serde_json::from_str(r#"{"convention": "default"}"#).expect("parse options");
        assert_eq!(options.convention.as_deref(), Some("default"));
        assert!(options.fast_path);
    }

    #[test]
    fn builder_sets_fields() {
        let options = ClassifierOptions::new().with_fast_path(false).with_convention("x");
        assert!(!options.fast_path);
        assert_eq!(options.convention.as_deref(), Some("x"));
    }
}
