//! The scitype classifier.
//!
//! # Algorithm
//!
//! [`Classifier::scitype`] checks, in order:
//!
//! 1. **Missing**: the missing sentinel is `Missing`.
//! 2. **Tuple**: the per-position scitypes, classified recursively.
//! 3. **Bulk container** (`Array`, `Series`) of `ndims` dimensions:
//!    - *fast path*: an entry for the element machine type under the active
//!      convention gives the element scitype, plus `Missing` when the
//!      container may hold missing values;
//!    - *slow path*: otherwise every element is classified and the results
//!      are unioned.
//!
//!    Either way the answer is `Array(ndims, element)`.
//! 4. **Everything else**: the active convention's scalar rule; failing
//!    that the trait tag, where `other` is `Unknown` and any other tag is
//!    passed back to the convention.
//!
//! Classification reads the active convention but never changes any state.

use std::borrow::Borrow;
use std::sync::Arc;

use scitype_model::{ConventionName, MachineType, Result, ScientificType, ScitypeError, TraitTag};

use crate::container::{BulkContainer, Tabular};
use crate::convention::{Convention, ConventionRegistry};
use crate::fast_path::FastPathRegistry;
use crate::options::ClassifierOptions;
use crate::table_type::TableType;
use crate::trait_resolver::TraitResolver;
use crate::value::Value;

/// Classification context: registered conventions, the active one, trait
/// predicates and fast-path entries.
///
/// Registration takes `&mut self` and classification `&self`, so a
/// classifier finished at startup can be shared freely afterwards.
#[derive(Debug, Default)]
pub struct Classifier {
    conventions: ConventionRegistry,
    traits: TraitResolver,
    fast_paths: FastPathRegistry,
    options: ClassifierOptions,
}

impl Classifier {
    /// A classifier with nothing registered and the unspecified convention
    /// active.
    pub fn new() -> Self {
        Self::default()
    }

    /// A classifier configured by `options`; `options.convention`, when set,
    /// is activated.
    pub fn with_options(options: ClassifierOptions) -> Self {
        let mut classifier = Self {
            options,
            ..Self::default()
        };
        if let Some(name) = classifier.options.convention.clone() {
            classifier.activate(name);
        }
        classifier
    }

    pub fn options(&self) -> &ClassifierOptions {
        &self.options
    }

    /// Register a ruleset and install its fast-path entries.
    ///
    /// Registering under a name already in use replaces the ruleset and every
    /// fast-path entry stored under that name, including entries added with
    /// [`register_fast_scitype`](Self::register_fast_scitype).
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a fast-path entry is invalid; the
    /// ruleset is not registered and existing entries are untouched in that
    /// case.
    pub fn register_convention<C>(&mut self, convention: C) -> Result<()>
    where
        C: Convention + 'static,
    {
        let name = convention.name();
        let entries = convention.fast_path_entries();

        // Validate every entry before installing any.
        let mut staged = FastPathRegistry::new();
        for (machine, scitype) in &entries {
            staged.register(name.clone(), machine.clone(), scitype.clone())?;
        }
        let stale = self.fast_paths.clear(&name);
        if stale > 0 {
            tracing::debug!(convention = %name, entries = stale, "dropped fast-path entries");
        }
        for (machine, scitype) in entries {
            self.fast_paths.register(name.clone(), machine, scitype)?;
        }

        let entries = self.fast_paths.len_for(&name);
        if self.conventions.register(Arc::new(convention)).is_some() {
            tracing::warn!(convention = %name, "replaced registered convention");
        }
        tracing::info!(convention = %name, fast_path_entries = entries, "registered convention");
        Ok(())
    }

    /// Make `name` the active convention. The last call wins.
    pub fn activate(&mut self, name: impl Into<ConventionName>) {
        self.conventions.activate(name.into());
    }

    pub fn current(&self) -> &ConventionName {
        self.conventions.current()
    }

    pub fn conventions(&self) -> &ConventionRegistry {
        &self.conventions
    }

    /// Add a trait predicate. It must not match values already matched by
    /// an earlier predicate.
    pub fn register_trait<F>(&mut self, tag: TraitTag, predicate: F)
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.traits.register(tag, predicate);
    }

    pub fn traits(&self) -> &TraitResolver {
        &self.traits
    }

    pub fn classify_trait(&self, value: &Value) -> TraitTag {
        self.traits.classify(value)
    }

    /// Register a fast-path scitype for containers of `machine` elements.
    ///
    /// # Errors
    ///
    /// See [`FastPathRegistry::register`].
    pub fn register_fast_scitype(
        &mut self,
        convention: impl Into<ConventionName>,
        machine: MachineType,
        scitype: ScientificType,
    ) -> Result<()> {
        self.fast_paths.register(convention.into(), machine, scitype)
    }

    pub fn fast_paths(&self) -> &FastPathRegistry {
        &self.fast_paths
    }

    /// The scitype of `value` under the active convention.
    pub fn scitype(&self, value: &Value) -> ScientificType {
        match value {
            Value::Missing => ScientificType::Missing,
            Value::Tuple(items) => ScientificType::Tuple(items.iter().map(|item| self.scitype(item)).collect()),
            Value::Array(array) => self.container_scitype(array),
            Value::Series(series) => self.container_scitype(series),
            other => self.atomic_scitype(other),
        }
    }

    /// The scitype of a bulk container: `Array(ndims, element)`.
    pub fn container_scitype(&self, container: &dyn BulkContainer) -> ScientificType {
        let ndims = container.ndims();
        let machine = container.element_type();

        if self.options.fast_path {
            let may_contain_missing = container.may_contain_missing();
            if let Some(element) = self
                .fast_paths
                .resolve(self.current(), &machine, may_contain_missing)
            {
                tracing::debug!(
                    convention = %self.current(),
                    machine = %machine,
                    element = %element,
                    "fast-path scitype"
                );
                return ScientificType::array(ndims, element);
            }
        }

        tracing::debug!(
            convention = %self.current(),
            machine = %machine,
            len = container.len(),
            "scanning container elements"
        );
        let element = container
            .elements()
            .fold(None, |acc: Option<ScientificType>, value| {
                let scitype = self.scitype(&value);
                Some(match acc {
                    Some(acc) => acc.union(scitype),
                    None => scitype,
                })
            })
            // No elements, no evidence.
            .unwrap_or(ScientificType::Unknown);
        ScientificType::array(ndims, element)
    }

    /// Union of the scitypes of every value in `values`.
    ///
    /// # Errors
    ///
    /// Returns [`ScitypeError::EmptyUnion`] when `values` is empty.
    pub fn scitype_union<I>(&self, values: I) -> Result<ScientificType>
    where
        I: IntoIterator,
        I::Item: Borrow<Value>,
    {
        values
            .into_iter()
            .map(|value| self.scitype(value.borrow()))
            .reduce(ScientificType::union)
            .ok_or(ScitypeError::EmptyUnion)
    }

    /// Element scitype of every column of `table`, in column order.
    pub fn column_scitypes(&self, table: &dyn Tabular) -> Vec<ScientificType> {
        table
            .columns()
            .into_iter()
            .map(|column| self.container_scitype(column.values).element().clone())
            .collect()
    }

    /// Whether `value` classifies as a table compatible with `table_type`,
    /// column by column.
    pub fn conforms(&self, value: &Value, table_type: &TableType) -> bool {
        table_type.accepts(&self.scitype(value))
    }

    /// Convert `value` so that it classifies as `target`, using the active
    /// convention.
    ///
    /// # Errors
    ///
    /// Returns [`ScitypeError::Unimplemented`] when the active convention has
    /// no ruleset or its ruleset does not implement coercion.
    pub fn coerce(&self, value: &Value, target: &ScientificType) -> Result<Value> {
        match self.conventions.active_ruleset() {
            Some(convention) => convention.coerce(value, target, self),
            None => Err(ScitypeError::unimplemented("coerce", self.current().as_str())),
        }
    }

    fn atomic_scitype(&self, value: &Value) -> ScientificType {
        let Some(convention) = self.conventions.active_ruleset() else {
            return ScientificType::Unknown;
        };
        if let Some(scitype) = convention.scalar_scitype(value) {
            return scitype;
        }
        let tag = self.traits.classify(value);
        if tag == TraitTag::OTHER {
            ScientificType::Unknown
        } else {
            convention.trait_scitype(&tag, value, self)
        }
    }
}
