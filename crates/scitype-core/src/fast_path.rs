//! Per-convention shortcuts from element machine type to scitype.
//!
//! An entry lets a bulk container be classified without visiting its
//! elements. Entries are an optimization only: with none registered the
//! classifier scans elements and reaches the same answer.

use std::collections::HashMap;

use scitype_model::{ConventionName, MachineType, Result, ScientificType, ScitypeError};

#[derive(Debug, Default)]
pub struct FastPathRegistry {
    entries: HashMap<ConventionName, HashMap<MachineType, ScientificType>>,
}

impl FastPathRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the scitype of every element of machine type `machine`.
    ///
    /// The entry also serves containers of `machine` that may hold missing
    /// values; register the bare element scitype, not its union with
    /// `Missing`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `scitype` is not a scientific type
    /// or already admits `Missing`. A replaced entry is logged.
    pub fn register(
        &mut self,
        convention: ConventionName,
        machine: MachineType,
        scitype: ScientificType,
    ) -> Result<()> {
        if !scitype.is_scientific() {
            return Err(ScitypeError::configuration(format!(
                "fast path for {machine} must map to a scientific type, got {scitype}"
            )));
        }
        if scitype.admits_missing() {
            return Err(ScitypeError::configuration(format!(
                "fast path for {machine} must not include Missing, got {scitype}"
            )));
        }
        let table = self.entries.entry(convention.clone()).or_default();
        if let Some(previous) = table.insert(machine.clone(), scitype) {
            tracing::debug!(
                convention = %convention,
                machine = %machine,
                previous = %previous,
                "replaced fast-path entry"
            );
        }
        Ok(())
    }

    /// The entry registered for bare `machine` under `convention`.
    pub fn lookup(&self, convention: &ConventionName, machine: &MachineType) -> Option<&ScientificType> {
        self.entries.get(convention)?.get(machine)
    }

    /// Resolve the element scitype for a container of `machine` elements,
    /// adding `Missing` when the container may hold missing values.
    pub fn resolve(
        &self,
        convention: &ConventionName,
        machine: &MachineType,
        may_contain_missing: bool,
    ) -> Option<ScientificType> {
        let scitype = self.lookup(convention, machine)?.clone();
        Some(if may_contain_missing {
            scitype.with_missing()
        } else {
            scitype
        })
    }

    /// Drop every entry registered under `convention`, returning how many
    /// there were.
    pub fn clear(&mut self, convention: &ConventionName) -> usize {
        self.entries.remove(convention).map_or(0, |table| table.len())
    }

    /// Number of entries registered under `convention`.
    pub fn len_for(&self, convention: &ConventionName) -> usize {
        self.entries.get(convention).map_or(0, HashMap::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convention() -> ConventionName {
        ConventionName::from_static("test")
    }

    #[test]
    fn lookup_is_scoped_by_convention() {
        let mut registry = FastPathRegistry::new();
        registry
            .register(convention(), MachineType::Float64, ScientificType::Continuous)
            .expect("register");
        assert_eq!(
            registry.lookup(&convention(), &MachineType::Float64),
            Some(&ScientificType::Continuous)
        );
        assert_eq!(
            registry.lookup(&ConventionName::unspecified(), &MachineType::Float64),
            None
        );
        assert_eq!(registry.lookup(&convention(), &MachineType::Int64), None);
    }

    #[test]
    fn resolve_reuses_bare_entry_for_missing() {
        let mut registry = FastPathRegistry::new();
        registry
            .register(convention(), MachineType::Int32, ScientificType::Count)
            .expect("register");
        assert_eq!(
            registry.resolve(&convention(), &MachineType::Int32, true),
            Some(ScientificType::Count.with_missing())
        );
        assert_eq!(
            registry.resolve(&convention(), &MachineType::Int32, false),
            Some(ScientificType::Count)
        );
    }

    #[test]
    fn rejects_non_scientific_entries() {
        let mut registry = FastPathRegistry::new();
        let err = registry
            .register(
                convention(),
                MachineType::Float64,
                ScientificType::array(1, ScientificType::Continuous),
            )
            .unwrap_err();
        assert!(matches!(err, ScitypeError::Configuration { .. }));

        let err = registry
            .register(
                convention(),
                MachineType::Float64,
                ScientificType::Continuous.with_missing(),
            )
            .unwrap_err();
        assert!(matches!(err, ScitypeError::Configuration { .. }));
        assert_eq!(registry.len_for(&convention()), 0);
    }

    #[test]
    fn clear_only_touches_one_convention() {
        let mut registry = FastPathRegistry::new();
        let other = ConventionName::from_static("other");
        registry
            .register(convention(), MachineType::Int8, ScientificType::Count)
            .expect("register");
        registry
            .register(other.clone(), MachineType::Int8, ScientificType::Count)
            .expect("register");
        assert_eq!(registry.clear(&convention()), 1);
        assert_eq!(registry.clear(&convention()), 0);
        assert_eq!(registry.len_for(&other), 1);
    }
}
