//! Conventions: pluggable classification rulesets and the selector of the
//! active one.
//!
//! # Architecture
//!
//! A [`Convention`] supplies the value-level rules the classifier cannot
//! decide structurally: what a float or a categorical level means, what a
//! table-tagged value classifies as, and which element machine types have a
//! fast-path scitype. The [`ConventionRegistry`] holds the registered
//! rulesets and the single active [`ConventionName`].
//!
//! # Example
//!
//! ```ignore
//! struct Counts;
//!
//! impl Convention for Counts {
//!     fn name(&self) -> ConventionName {
//!         ConventionName::from_static("counts")
//!     }
//!
//!     fn scalar_scitype(&self, value: &Value) -> Option<ScientificType> {
//!         matches!(value, Value::Int(_)).then_some(ScientificType::Count)
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use scitype_model::{ConventionName, MachineType, Result, ScientificType, ScitypeError, TraitTag};

use crate::classifier::Classifier;
use crate::value::Value;

/// A named classification ruleset.
pub trait Convention: Send + Sync {
    fn name(&self) -> ConventionName;

    /// Scitype of an atomic value, or `None` to defer to trait resolution.
    fn scalar_scitype(&self, value: &Value) -> Option<ScientificType>;

    /// Scitype of a value whose trait tag is not [`TraitTag::OTHER`].
    ///
    /// `classifier` is available for classifying nested values such as
    /// table columns.
    fn trait_scitype(&self, tag: &TraitTag, value: &Value, classifier: &Classifier) -> ScientificType {
        let _ = (tag, value, classifier);
        ScientificType::Unknown
    }

    /// Fast-path entries installed when the convention is registered.
    fn fast_path_entries(&self) -> Vec<(MachineType, ScientificType)> {
        Vec::new()
    }

    /// Convert `value` so it classifies as `target`.
    ///
    /// # Errors
    ///
    /// The default body returns [`ScitypeError::Unimplemented`].
    fn coerce(&self, value: &Value, target: &ScientificType, classifier: &Classifier) -> Result<Value> {
        let _ = (value, target, classifier);
        Err(ScitypeError::unimplemented("coerce", self.name().as_str()))
    }
}

/// Registered rulesets plus the single active convention name.
///
/// The active name starts as [`ConventionName::UNSPECIFIED`]; the last
/// activation wins.
#[derive(Default)]
pub struct ConventionRegistry {
    rulesets: HashMap<ConventionName, Arc<dyn Convention>>,
    active: ConventionName,
}

impl ConventionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a ruleset under its own name, returning any ruleset it
    /// replaces.
    pub fn register(&mut self, convention: Arc<dyn Convention>) -> Option<Arc<dyn Convention>> {
        self.rulesets.insert(convention.name(), convention)
    }

    /// Make `name` the active convention.
    ///
    /// Activating a name without a registered ruleset is allowed: fast-path
    /// entries may exist for it, and every value-level rule answers
    /// `Unknown`.
    pub fn activate(&mut self, name: ConventionName) {
        if !name.is_unspecified() && !self.rulesets.contains_key(&name) {
            tracing::warn!(convention = %name, "activated convention has no registered ruleset");
        }
        if self.active != name {
            tracing::info!(from = %self.active, to = %name, "activated convention");
        }
        self.active = name;
    }

    pub fn current(&self) -> &ConventionName {
        &self.active
    }

    /// The ruleset registered under the active name.
    pub fn active_ruleset(&self) -> Option<&dyn Convention> {
        self.rulesets.get(&self.active).map(|ruleset| ruleset.as_ref())
    }

    pub fn get(&self, name: &ConventionName) -> Option<&dyn Convention> {
        self.rulesets.get(name).map(|ruleset| ruleset.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &ConventionName> {
        self.rulesets.keys()
    }
}

impl fmt::Debug for ConventionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConventionRegistry")
            .field("rulesets", &self.rulesets.keys().collect::<Vec<_>>())
            .field("active", &self.active)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Convention for Named {
        fn name(&self) -> ConventionName {
            ConventionName::from_static(self.0)
        }

        fn scalar_scitype(&self, _value: &Value) -> Option<ScientificType> {
            None
        }
    }

    #[test]
    fn starts_unspecified() {
        let registry = ConventionRegistry::new();
        assert!(registry.current().is_unspecified());
        assert!(registry.active_ruleset().is_none());
    }

    #[test]
    fn last_activation_wins() {
        let mut registry = ConventionRegistry::new();
        registry.register(Arc::new(Named("a")));
        registry.register(Arc::new(Named("b")));

        registry.activate(ConventionName::from_static("a"));
        registry.activate(ConventionName::from_static("b"));
        registry.activate(ConventionName::from_static("b"));
        assert_eq!(registry.current().as_str(), "b");
        assert_eq!(
            registry.active_ruleset().map(|c| c.name()),
            Some(ConventionName::from_static("b"))
        );
    }

    #[test]
    fn unregistered_names_can_be_active() {
        let mut registry = ConventionRegistry::new();
        registry.activate(ConventionName::new("nowhere"));
        assert_eq!(registry.current().as_str(), "nowhere");
        assert!(registry.active_ruleset().is_none());
    }
}
