//! Default scitype convention and table support.
//!
//! ```
//! use scitype_core::{Array, ScientificType, Value};
//! use scitype_default::default_classifier;
//!
//! let classifier = default_classifier();
//! let heights = Value::from(Array::vector([Some(1.72), None, Some(1.64)]));
//! assert_eq!(
//!     classifier.scitype(&heights),
//!     ScientificType::array(1, ScientificType::Continuous.with_missing())
//! );
//! ```

pub mod convention;
pub mod tables;

use scitype_core::{Classifier, ClassifierOptions, Result};

pub use convention::{DEFAULT_CONVENTION, DefaultConvention};
pub use tables::register_table_support;

/// A classifier with the default convention registered and active and
/// table support installed.
pub fn default_classifier() -> Classifier {
    default_classifier_with_options(ClassifierOptions::new())
}

/// Like [`default_classifier`], honouring `options`. The default convention
/// is activated unless `options.convention` names another.
pub fn default_classifier_with_options(mut options: ClassifierOptions) -> Classifier {
    if options.convention.is_none() {
        options.convention = Some(DEFAULT_CONVENTION.to_string());
    }
    let mut classifier = Classifier::with_options(options);
    register_default_convention(&mut classifier)
        .expect("default fast-path entries are scientific and exclude Missing");
    register_table_support(&mut classifier);
    classifier
}

/// Register [`DefaultConvention`] without activating it.
///
/// # Errors
///
/// Returns the configuration error from
/// [`Classifier::register_convention`] if a fast-path entry is rejected.
pub fn register_default_convention(classifier: &mut Classifier) -> Result<()> {
    classifier.register_convention(DefaultConvention)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_convention_registers_cleanly() {
        let mut classifier = Classifier::new();
        register_default_convention(&mut classifier).expect("register");
        assert_eq!(classifier.fast_paths().len_for(&DEFAULT_CONVENTION), 10);
        assert!(classifier.current().is_unspecified());
    }
}
