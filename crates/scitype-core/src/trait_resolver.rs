//! Trait resolution: ordered predicates that tag values by structural
//! capability.
//!
//! Predicates are expected to be mutually exclusive. When two match, the one
//! registered first wins.

use std::fmt;

use scitype_model::TraitTag;

use crate::value::Value;

type Predicate = Box<dyn Fn(&Value) -> bool + Send + Sync>;

/// Registration-ordered list of `(tag, predicate)` pairs.
#[derive(Default)]
pub struct TraitResolver {
    predicates: Vec<(TraitTag, Predicate)>,
}

impl TraitResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate. Exclusivity with existing predicates is the
    /// caller's responsibility.
    pub fn register<F>(&mut self, tag: TraitTag, predicate: F)
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        tracing::debug!(tag = %tag, position = self.predicates.len(), "registered trait predicate");
        self.predicates.push((tag, Box::new(predicate)));
    }

    /// Tag of the first matching predicate, or [`TraitTag::OTHER`].
    pub fn classify(&self, value: &Value) -> TraitTag {
        self.predicates
            .iter()
            .find(|(_, predicate)| predicate(value))
            .map_or(TraitTag::OTHER, |(tag, _)| tag.clone())
    }

    pub fn tags(&self) -> impl Iterator<Item = &TraitTag> {
        self.predicates.iter().map(|(tag, _)| tag)
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl fmt::Debug for TraitResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tags()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_values_are_other() {
        let resolver = TraitResolver::new();
        assert_eq!(resolver.classify(&Value::Int(1)), TraitTag::OTHER);
    }

    #[test]
    fn first_registered_predicate_wins() {
        let mut resolver = TraitResolver::new();
        resolver.register(TraitTag::from_static("text"), |v| matches!(v, Value::Str(_)));
        resolver.register(TraitTag::from_static("anything"), |_| true);

        assert_eq!(resolver.classify(&Value::from("a")).as_str(), "text");
        assert_eq!(resolver.classify(&Value::Int(1)).as_str(), "anything");
        assert_eq!(resolver.len(), 2);
    }
}
