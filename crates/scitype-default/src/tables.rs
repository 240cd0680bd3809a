//! Table support: registers the `table` trait predicate.
//!
//! Without it, tables are just values with trait `other`: they classify as
//! `Unknown` and have no schema.

use scitype_core::{Classifier, TraitTag, Value};

/// Tag polars data frames and column tables as `table`.
pub fn register_table_support(classifier: &mut Classifier) {
    if classifier.traits().tags().any(|tag| *tag == TraitTag::TABLE) {
        tracing::debug!("table support already registered");
        return;
    }
    classifier.register_trait(TraitTag::TABLE, |value| {
        matches!(value, Value::Frame(_) | Value::Columns(_))
    });
}
