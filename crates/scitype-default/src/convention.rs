//! The default convention.
//!
//! | value                              | scitype                      |
//! |------------------------------------|------------------------------|
//! | float                              | `Continuous`                 |
//! | signed or unsigned integer         | `Count`                      |
//! | level of an unordered pool of n    | `Multiclass(n)`              |
//! | level of an ordered pool of n      | `OrderedFactor(n)`           |
//! | gray / color image                 | `GrayImage` / `ColorImage`   |
//! | `table`-tagged value               | `Table(column scitypes)`     |
//! | anything else                      | `Unknown`                    |

use scitype_core::{
    Classifier, ColorModel, Convention, ConventionName, MachineType, ScientificType, TraitTag,
    Value,
};

pub const DEFAULT_CONVENTION: ConventionName = ConventionName::from_static("default");

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConvention;

impl Convention for DefaultConvention {
    fn name(&self) -> ConventionName {
        DEFAULT_CONVENTION
    }

    fn scalar_scitype(&self, value: &Value) -> Option<ScientificType> {
        match value {
            Value::Float(_) => Some(ScientificType::Continuous),
            Value::Int(_) | Value::UInt(_) => Some(ScientificType::Count),
            Value::Categorical(level) => {
                let pool = level.pool();
                Some(if pool.is_ordered() {
                    ScientificType::OrderedFactor(pool.cardinality())
                } else {
                    ScientificType::Multiclass(pool.cardinality())
                })
            }
            Value::Image(image) => Some(match image.color {
                ColorModel::Gray => ScientificType::GrayImage {
                    width: image.width,
                    height: image.height,
                },
                ColorModel::Color => ScientificType::ColorImage {
                    width: image.width,
                    height: image.height,
                },
            }),
            _ => None,
        }
    }

    fn trait_scitype(&self, tag: &TraitTag, value: &Value, classifier: &Classifier) -> ScientificType {
        if *tag != TraitTag::TABLE {
            return ScientificType::Unknown;
        }
        value.as_table().map_or(ScientificType::Unknown, |table| {
            ScientificType::table(classifier.column_scitypes(table))
        })
    }

    fn fast_path_entries(&self) -> Vec<(MachineType, ScientificType)> {
        let floats = [MachineType::Float32, MachineType::Float64]
            .into_iter()
            .map(|machine| (machine, ScientificType::Continuous));
        let integers = MachineType::integers()
            .into_iter()
            .map(|machine| (machine, ScientificType::Count));
        floats.chain(integers).collect()
    }
}

#[cfg(test)]
mod tests {
    use scitype_core::{CategoryPool, Image};

    use super::*;

    #[test]
    fn scalars() {
        let rules = DefaultConvention;
        assert_eq!(rules.scalar_scitype(&Value::Float(f64::NAN)), Some(ScientificType::Continuous));
        assert_eq!(rules.scalar_scitype(&Value::UInt(7)), Some(ScientificType::Count));
        assert_eq!(rules.scalar_scitype(&Value::Bool(true)), None);
        assert_eq!(rules.scalar_scitype(&Value::from("text")), None);
    }

    #[test]
    fn categorical_cardinality_comes_from_the_pool() {
        let rules = DefaultConvention;
        let unordered = CategoryPool::new(["a", "b", "c"], false);
        let ordered = CategoryPool::new(["lo", "hi"], true);
        let a = Value::from(unordered.value("a").expect("level"));
        let hi = Value::from(ordered.value("hi").expect("level"));
        assert_eq!(rules.scalar_scitype(&a), Some(ScientificType::Multiclass(3)));
        assert_eq!(rules.scalar_scitype(&hi), Some(ScientificType::OrderedFactor(2)));
    }

    #[test]
    fn images_keep_dimensions() {
        let rules = DefaultConvention;
        assert_eq!(
            rules.scalar_scitype(&Value::from(Image::color(64, 32))),
            Some(ScientificType::ColorImage {
                width: 64,
                height: 32
            })
        );
    }

    #[test]
    fn fast_path_covers_every_numeric_machine_type() {
        let entries = DefaultConvention.fast_path_entries();
        assert_eq!(entries.len(), 10);
        assert!(entries.iter().all(|(machine, _)| machine.is_float() || machine.is_integer()));
    }
}
