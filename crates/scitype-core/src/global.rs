//! Process-wide classifier for "set once at startup" use.
//!
//! Build and configure a [`Classifier`], hand it to [`install_global`] once,
//! then use the free functions. Until something is installed, [`global`]
//! returns a classifier with nothing registered.

use std::borrow::Borrow;
use std::sync::OnceLock;

use scitype_model::{Result, Schema, ScientificType, ScitypeError};

use crate::classifier::Classifier;
use crate::value::Value;

static GLOBAL: OnceLock<Classifier> = OnceLock::new();

/// Install the process-wide classifier.
///
/// # Errors
///
/// Returns a configuration error if a classifier is already installed, or
/// if [`global`] was called before this and fell back to the empty one.
pub fn install_global(classifier: Classifier) -> Result<()> {
    let convention = classifier.current().clone();
    GLOBAL.set(classifier).map_err(|_| {
        tracing::warn!(convention = %convention, "global classifier already installed");
        ScitypeError::configuration("a global classifier is already installed")
    })?;
    tracing::info!(convention = %convention, "installed global classifier");
    Ok(())
}

/// The process-wide classifier.
pub fn global() -> &'static Classifier {
    GLOBAL.get_or_init(Classifier::new)
}

/// [`Classifier::scitype`] on the global classifier.
pub fn scitype(value: &Value) -> ScientificType {
    global().scitype(value)
}

/// [`Classifier::scitype_union`] on the global classifier.
///
/// # Errors
///
/// Returns [`ScitypeError::EmptyUnion`] when `values` is empty.
pub fn scitype_union<I>(values: I) -> Result<ScientificType>
where
    I: IntoIterator,
    I::Item: Borrow<Value>,
{
    global().scitype_union(values)
}

/// [`Classifier::schema`] on the global classifier.
///
/// # Errors
///
/// Returns a usage error for values that are not tables.
pub fn schema(value: &Value) -> Result<Schema> {
    global().schema(value)
}
